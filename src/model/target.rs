//! Targets remembered on access lists and the kinds they are classified into.

use std::fmt;

use sea_orm::DbErr;

/// The kind of Discord object a target ID refers to.
///
/// The kind is decided at request time by classifying the ID against the guild's live
/// members, roles and channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Account,
    Role,
    Channel,
}

impl TargetKind {
    /// Stored form of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Role => "role",
            Self::Channel => "channel",
        }
    }

    /// Human-readable label used in embed footers (`"User ID: 123"`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "User",
            Self::Role => "Role",
            Self::Channel => "Channel",
        }
    }

    /// Parses the stored form of a kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "account" => Some(Self::Account),
            "role" => Some(Self::Role),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }

    /// Renders a Discord mention for an ID of this kind.
    pub fn mention(&self, id: u64) -> String {
        match self {
            Self::Account => format!("<@{}>", id),
            Self::Role => format!("<@&{}>", id),
            Self::Channel => format!("<#{}>", id),
        }
    }

    /// Converts a stored kind, failing with `DbErr::Custom` on unknown values.
    pub fn from_stored(value: &str) -> Result<Self, DbErr> {
        Self::parse(value)
            .ok_or_else(|| DbErr::Custom(format!("Unknown target kind '{}'", value)))
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remembered account, role or channel.
///
/// The name is captured when the target is added and not kept in sync with Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: u64,
    pub name: String,
}
