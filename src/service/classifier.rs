//! Target classification against live guild state.
//!
//! A target ID carries no kind of its own. It is placed into accounts, roles or
//! channels by looking it up in a snapshot of the guild's current members, roles and
//! channels, in that order.

use std::collections::HashMap;

use serenity::all::Guild;

use crate::{
    error::access::AccessError,
    model::{guild_record::FindOrCreateGuildRecordParam, target::TargetKind},
};

/// Live member, role and channel IDs of a guild, with their display names.
///
/// Built from the gateway cache and extended with the resolved objects an interaction
/// carries, since the cache may not hold every member.
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    pub guild_id: u64,
    pub guild_name: String,
    pub owner_id: u64,
    members: HashMap<u64, String>,
    roles: HashMap<u64, String>,
    channels: HashMap<u64, String>,
}

impl GuildSnapshot {
    pub fn new(guild_id: u64, guild_name: impl Into<String>, owner_id: u64) -> Self {
        Self {
            guild_id,
            guild_name: guild_name.into(),
            owner_id,
            ..Default::default()
        }
    }

    /// Captures the cached state of a guild.
    pub fn from_guild(guild: &Guild) -> Self {
        let mut snapshot = Self::new(guild.id.get(), guild.name.clone(), guild.owner_id.get());

        for (id, member) in &guild.members {
            snapshot.insert_member(id.get(), member.user.tag());
        }
        for (id, role) in &guild.roles {
            snapshot.insert_role(id.get(), role.name.clone());
        }
        for (id, channel) in &guild.channels {
            snapshot.insert_channel(id.get(), channel.name.clone());
        }

        snapshot
    }

    pub fn insert_member(&mut self, id: u64, name: impl Into<String>) {
        self.members.insert(id, name.into());
    }

    pub fn insert_role(&mut self, id: u64, name: impl Into<String>) {
        self.roles.insert(id, name.into());
    }

    pub fn insert_channel(&mut self, id: u64, name: impl Into<String>) {
        self.channels.insert(id, name.into());
    }

    /// Current display name of a target of the given kind.
    pub fn name(&self, kind: TargetKind, id: u64) -> Option<&str> {
        let names = match kind {
            TargetKind::Account => &self.members,
            TargetKind::Role => &self.roles,
            TargetKind::Channel => &self.channels,
        };

        names.get(&id).map(String::as_str)
    }

    /// Parameters for resolving this guild's record.
    ///
    /// The owner name falls back to the owner's ID when the owner is not cached.
    pub fn record_param(&self) -> FindOrCreateGuildRecordParam {
        FindOrCreateGuildRecordParam {
            guild_id: self.guild_id,
            guild_name: self.guild_name.clone(),
            owner_id: self.owner_id,
            owner_name: self
                .members
                .get(&self.owner_id)
                .cloned()
                .unwrap_or_else(|| self.owner_id.to_string()),
        }
    }
}

/// Places a target ID into exactly one kind.
///
/// Members are checked first, then roles, then channels.
///
/// # Returns
/// - `Ok(TargetKind)` - The kind the ID belongs to
/// - `Err(AccessError::UnresolvableTarget)` - The ID is none of the guild's members,
///   roles or channels
pub fn classify(target_id: u64, snapshot: &GuildSnapshot) -> Result<TargetKind, AccessError> {
    if snapshot.members.contains_key(&target_id) {
        Ok(TargetKind::Account)
    } else if snapshot.roles.contains_key(&target_id) {
        Ok(TargetKind::Role)
    } else if snapshot.channels.contains_key(&target_id) {
        Ok(TargetKind::Channel)
    } else {
        Err(AccessError::UnresolvableTarget(target_id))
    }
}
