//! Role hierarchy checks run before account and role targets are modified.
//!
//! A moderator may only select accounts and roles that sit strictly below their own
//! highest role. Channels have no position in the role hierarchy and are never checked.

use std::collections::HashMap;

use serenity::all::{Role, RoleId, UserId};

/// The account or role a moderator is trying to select.
#[derive(Debug, Clone, Copy)]
pub enum PrivilegeTarget<'a> {
    Account {
        id: UserId,
        bot: bool,
        role_ids: &'a [RoleId],
    },
    Role {
        position: u16,
    },
}

/// The moderator invoking the command.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    pub id: UserId,
    pub role_ids: &'a [RoleId],
}

/// Why a target may not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyRejection {
    SelfTarget,
    Bot,
    HigherUser,
    HigherRole,
}

impl HierarchyRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SelfTarget => "You cannot select yourself",
            Self::Bot => "You cannot select a bot",
            Self::HigherUser => {
                "You cannot select that user as they are higher or equal to you in the role hierarchy"
            }
            Self::HigherRole => {
                "You cannot select that role as they are higher or equal to you in the role hierarchy"
            }
        }
    }
}

/// Position of a member's highest role, `0` when the member holds none.
///
/// Role IDs missing from `roles` are ignored.
pub fn highest_role_position(role_ids: &[RoleId], roles: &HashMap<RoleId, Role>) -> u16 {
    role_ids
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

/// Checks whether `actor` may select `target`.
///
/// # Arguments
/// - `target` - Account or role being selected
/// - `actor` - Moderator invoking the command
/// - `roles` - The guild's roles, used to resolve positions
///
/// # Returns
/// - `None` - The target may be selected
/// - `Some(HierarchyRejection)` - The reason the selection is refused
pub fn check_privilege(
    target: &PrivilegeTarget<'_>,
    actor: &Actor<'_>,
    roles: &HashMap<RoleId, Role>,
) -> Option<HierarchyRejection> {
    let actor_position = highest_role_position(actor.role_ids, roles);

    match target {
        PrivilegeTarget::Account { id, bot, role_ids } => {
            if *id == actor.id {
                Some(HierarchyRejection::SelfTarget)
            } else if *bot {
                Some(HierarchyRejection::Bot)
            } else if highest_role_position(role_ids, roles) >= actor_position {
                Some(HierarchyRejection::HigherUser)
            } else {
                None
            }
        }
        PrivilegeTarget::Role { position } => {
            if *position >= actor_position {
                Some(HierarchyRejection::HigherRole)
            } else {
                None
            }
        }
    }
}
