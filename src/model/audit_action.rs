//! Audit action domain model and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{model::target::Target, util::parse::parse_snowflake};

/// Moderation action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditActionType {
    Mute,
    Kick,
    Ban,
}

impl AuditActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mute => "Mute",
            Self::Kick => "Kick",
            Self::Ban => "Ban",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mute" => Some(Self::Mute),
            "kick" => Some(Self::Kick),
            "ban" => Some(Self::Ban),
            _ => None,
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, DbErr> {
        Self::parse(value)
            .ok_or_else(|| DbErr::Custom(format!("Unknown audit action type '{}'", value)))
    }
}

/// A moderation action taken against a target.
///
/// Audit actions share the case numbering sequence with access list mutations but are
/// never validated against list state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditAction {
    pub id: i32,
    pub guild_id: u64,
    pub target: Target,
    pub executor: Target,
    pub action_type: AuditActionType,
    pub reason: Option<String>,
    pub case_number: i64,
    pub created_at: DateTime<Utc>,
}

impl AuditAction {
    /// Converts an entity model to the audit action domain model
    ///
    /// # Returns
    /// - `Ok(AuditAction)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored snowflake or action type failed to parse
    pub fn from_entity(entity: entity::audit_action::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            target: Target {
                id: parse_snowflake("target_id", &entity.target_id)?,
                name: entity.target_name,
            },
            executor: Target {
                id: parse_snowflake("executor_id", &entity.executor_id)?,
                name: entity.executor_name,
            },
            action_type: AuditActionType::from_stored(&entity.action_type)?,
            reason: entity.reason,
            case_number: entity.case_number,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording a new audit action.
///
/// The case number is allocated by the repository.
#[derive(Debug, Clone)]
pub struct CreateAuditActionParam {
    pub guild_id: u64,
    pub target: Target,
    pub executor: Target,
    pub action_type: AuditActionType,
    pub reason: Option<String>,
}
