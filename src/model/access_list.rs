//! Domain & parameter models for allow and deny lists
//!
//! An access list is rebuilt from its `access_list` row and the `access_entry` rows of
//! the same guild and kind. Entries without a command name form the guild-wide
//! selection; entries sharing a command name form that command's scoped selection.

use std::fmt;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        guild_record::FindOrCreateGuildRecordParam,
        payload::MovePayload,
        target::{Target, TargetKind},
    },
    util::parse::parse_snowflake,
};

/// Which of a guild's two lists an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessListKind {
    Allow,
    Deny,
}

impl AccessListKind {
    /// Stored form of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }

    /// Display name shown to users and used as the slash command name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Allow => "allowlist",
            Self::Deny => "denylist",
        }
    }

    /// The other list of the pair.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Allow => Self::Deny,
            Self::Deny => Self::Allow,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "allow" => Some(Self::Allow),
            "deny" => Some(Self::Deny),
            _ => None,
        }
    }

    /// Resolves a list from its display (command) name.
    pub fn from_display_name(value: &str) -> Option<Self> {
        match value {
            "allowlist" => Some(Self::Allow),
            "denylist" => Some(Self::Deny),
            _ => None,
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, DbErr> {
        Self::parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown list kind '{}'", value)))
    }
}

impl fmt::Display for AccessListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Mutation requested against a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    Add,
    Remove,
}

impl AccessAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// A single remembered target row.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessEntry {
    pub id: i32,
    pub guild_id: u64,
    pub list: AccessListKind,
    pub command_name: Option<String>,
    pub kind: TargetKind,
    pub target: Target,
    pub created_at: DateTime<Utc>,
}

impl AccessEntry {
    /// Converts an entity model to the access entry domain model
    ///
    /// # Returns
    /// - `Ok(AccessEntry)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored snowflake or kind failed to parse
    pub fn from_entity(entity: entity::access_entry::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            list: AccessListKind::from_stored(&entity.list_kind)?,
            command_name: entity.command_name,
            kind: TargetKind::from_stored(&entity.target_kind)?,
            target: Target {
                id: parse_snowflake("target_id", &entity.target_id)?,
                name: entity.name,
            },
            created_at: entity.created_at,
        })
    }
}

/// Three disjoint sequences of remembered targets, one per kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessSelection {
    pub accounts: Vec<Target>,
    pub roles: Vec<Target>,
    pub channels: Vec<Target>,
}

impl AccessSelection {
    pub fn targets(&self, kind: TargetKind) -> &[Target] {
        match kind {
            TargetKind::Account => &self.accounts,
            TargetKind::Role => &self.roles,
            TargetKind::Channel => &self.channels,
        }
    }

    pub fn contains(&self, kind: TargetKind, id: u64) -> bool {
        self.targets(kind).iter().any(|t| t.id == id)
    }

    /// Appends a target, keeping each `(kind, id)` at most once.
    fn push(&mut self, kind: TargetKind, target: Target) {
        if self.contains(kind, target.id) {
            return;
        }

        match kind {
            TargetKind::Account => self.accounts.push(target),
            TargetKind::Role => self.roles.push(target),
            TargetKind::Channel => self.channels.push(target),
        }
    }
}

/// The targets of one list that only apply to a named command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandScopedSelection {
    pub command_name: String,
    pub selection: AccessSelection,
}

/// An allow or deny list of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessList {
    pub guild_id: u64,
    pub kind: AccessListKind,
    /// Case number of the latest committed mutation of this list.
    pub case_number: Option<i64>,
    pub guild_wide: AccessSelection,
    pub commands: Vec<CommandScopedSelection>,
    pub updated_at: DateTime<Utc>,
}

impl AccessList {
    /// Rebuilds a list from its row and its entries.
    ///
    /// Entries are expected in insertion order; that order is kept for listing.
    /// Entries belonging to a different guild or list are ignored.
    pub fn from_entities(
        list: entity::access_list::Model,
        entries: Vec<entity::access_entry::Model>,
    ) -> Result<Self, DbErr> {
        let mut access_list = Self {
            guild_id: parse_snowflake("guild_id", &list.guild_id)?,
            kind: AccessListKind::from_stored(&list.kind)?,
            case_number: list.case_number,
            guild_wide: AccessSelection::default(),
            commands: Vec::new(),
            updated_at: list.updated_at,
        };

        for entry in entries {
            let entry = AccessEntry::from_entity(entry)?;
            if entry.guild_id != access_list.guild_id || entry.list != access_list.kind {
                continue;
            }

            match entry.command_name {
                None => access_list.guild_wide.push(entry.kind, entry.target),
                Some(command_name) => {
                    let index = match access_list
                        .commands
                        .iter()
                        .position(|c| c.command_name == command_name)
                    {
                        Some(index) => index,
                        None => {
                            access_list.commands.push(CommandScopedSelection {
                                command_name,
                                selection: AccessSelection::default(),
                            });
                            access_list.commands.len() - 1
                        }
                    };
                    access_list.commands[index]
                        .selection
                        .push(entry.kind, entry.target);
                }
            }
        }

        Ok(access_list)
    }

    /// The selection for a scope: guild-wide when `command_name` is `None`.
    pub fn selection(&self, command_name: Option<&str>) -> Option<&AccessSelection> {
        match command_name {
            None => Some(&self.guild_wide),
            Some(name) => self
                .commands
                .iter()
                .find(|c| c.command_name == name)
                .map(|c| &c.selection),
        }
    }
}

/// Identifies one target within one list scope of a guild.
#[derive(Debug, Clone)]
pub struct AccessEntryParam {
    pub guild_id: u64,
    pub list: AccessListKind,
    pub kind: TargetKind,
    pub target: Target,
    pub command_name: Option<String>,
}

/// Parameters for a guarded add or remove against a list.
///
/// `transfer` marks the call as one half of a confirmed move: the duplicate, missing
/// and conflict checks are skipped and the mutation is committed directly.
#[derive(Debug, Clone)]
pub struct ModifySelectionParam {
    pub guild: FindOrCreateGuildRecordParam,
    pub target: Target,
    pub kind: TargetKind,
    pub list: AccessListKind,
    pub action: AccessAction,
    pub command_name: Option<String>,
    pub transfer: bool,
}

/// Parameters for executing a confirmed move.
#[derive(Debug, Clone)]
pub struct ConfirmMoveParam {
    pub guild: FindOrCreateGuildRecordParam,
    pub payload: MovePayload,
    /// Current name of the target on Discord, when it can still be resolved.
    pub target_name: Option<String>,
}
