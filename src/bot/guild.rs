//! Live guild state needed to classify targets and check the role hierarchy.

use std::collections::HashMap;

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, CommandDataResolved, Context, Guild, GuildChannel, GuildId, Member, PartialGuild,
    Role, RoleId, UserId,
};

use crate::{
    error::AppError,
    model::target::TargetKind,
    service::{
        classifier::GuildSnapshot,
        hierarchy::{check_privilege, Actor, HierarchyRejection, PrivilegeTarget},
    },
};

#[derive(Debug, Clone)]
struct MemberInfo {
    bot: bool,
    role_ids: Vec<RoleId>,
}

/// A guild's members, roles and channels as seen at interaction time.
#[derive(Debug, Clone)]
pub struct GuildContext {
    pub snapshot: GuildSnapshot,
    pub roles: HashMap<RoleId, Role>,
    members: HashMap<UserId, MemberInfo>,
}

impl GuildContext {
    /// Loads a guild from the gateway cache, falling back to the HTTP API.
    ///
    /// Without the cache only roles and channels are known; members are added from
    /// the interaction's resolved data by `merge_resolved`.
    ///
    /// # Returns
    /// - `Ok(GuildContext)` - The guild's current state
    /// - `Err(AppError::DiscordErr)` - The guild could not be fetched
    pub async fn load(ctx: &Context, guild_id: GuildId) -> Result<Self, AppError> {
        // The cache reference must be dropped before the next await
        let cached = ctx.cache.guild(guild_id).map(|guild| Self::from_guild(&guild));
        if let Some(context) = cached {
            return Ok(context);
        }

        tracing::debug!("Guild {} not cached, fetching it", guild_id);

        let guild = guild_id.to_partial_guild(&ctx.http).await?;
        let channels = guild_id.channels(&ctx.http).await?;

        Ok(Self::from_partial(guild, channels))
    }

    pub fn from_guild(guild: &Guild) -> Self {
        let members = guild
            .members
            .iter()
            .map(|(id, member)| (*id, MemberInfo::from_member(member)))
            .collect();

        Self {
            snapshot: GuildSnapshot::from_guild(guild),
            roles: guild.roles.clone(),
            members,
        }
    }

    pub fn from_partial(guild: PartialGuild, channels: HashMap<ChannelId, GuildChannel>) -> Self {
        let mut snapshot = GuildSnapshot::new(guild.id.get(), guild.name, guild.owner_id.get());
        for (id, role) in &guild.roles {
            snapshot.insert_role(id.get(), role.name.clone());
        }
        for (id, channel) in &channels {
            snapshot.insert_channel(id.get(), channel.name.clone());
        }

        Self {
            snapshot,
            roles: guild.roles,
            members: HashMap::new(),
        }
    }

    /// Adds the members, roles and channels an interaction resolved for its options.
    ///
    /// Users without a resolved member are not guild members and are skipped.
    pub fn merge_resolved(&mut self, resolved: &CommandDataResolved) {
        for (id, member) in &resolved.members {
            let user = resolved.users.get(id);
            let name = user.map(|u| u.tag()).unwrap_or_else(|| id.to_string());

            self.snapshot.insert_member(id.get(), name);
            self.members.insert(
                *id,
                MemberInfo {
                    bot: user.map(|u| u.bot).unwrap_or(false),
                    role_ids: member.roles.clone(),
                },
            );
        }
        for (id, role) in &resolved.roles {
            self.snapshot.insert_role(id.get(), role.name.clone());
            self.roles.insert(*id, role.clone());
        }
        for (id, channel) in &resolved.channels {
            let name = channel.name.clone().unwrap_or_else(|| id.to_string());
            self.snapshot.insert_channel(id.get(), name);
        }
    }

    /// Adds the invoking member, who may be missing from the cache.
    pub fn insert_member(&mut self, member: &Member) {
        self.snapshot
            .insert_member(member.user.id.get(), member.user.tag());
        self.members
            .insert(member.user.id, MemberInfo::from_member(member));
    }

    /// Checks whether `actor` may select the target.
    ///
    /// Channels are never checked. A role missing from the guild is treated as
    /// unchecked, since classification already placed the ID.
    ///
    /// # Returns
    /// - `None` - The target may be selected
    /// - `Some(HierarchyRejection)` - The reason the selection is refused
    pub fn check_privilege(
        &self,
        actor: &Member,
        kind: TargetKind,
        target_id: u64,
    ) -> Option<HierarchyRejection> {
        let target = match kind {
            TargetKind::Account => {
                let id = UserId::new(target_id);
                let info = self.members.get(&id);
                PrivilegeTarget::Account {
                    id,
                    bot: info.map(|i| i.bot).unwrap_or(false),
                    role_ids: info.map(|i| i.role_ids.as_slice()).unwrap_or(&[]),
                }
            }
            TargetKind::Role => PrivilegeTarget::Role {
                position: self.roles.get(&RoleId::new(target_id))?.position,
            },
            TargetKind::Channel => return None,
        };

        let actor = Actor {
            id: actor.user.id,
            role_ids: &actor.roles,
        };

        check_privilege(&target, &actor, &self.roles)
    }
}

impl MemberInfo {
    fn from_member(member: &Member) -> Self {
        Self {
            bot: member.user.bot,
            role_ids: member.roles.clone(),
        }
    }
}
