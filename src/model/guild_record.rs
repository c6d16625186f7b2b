//! Guild record domain model and its find-or-create parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::parse_snowflake;

/// Root aggregate for a guild.
///
/// Owns exactly one allow list, one deny list and the guild's audit actions. Created
/// lazily the first time a guild is referenced and never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRecord {
    pub id: i32,
    pub guild_id: u64,
    pub guild_name: String,
    pub created_by_id: u64,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildRecord {
    /// Converts an entity model to the guild record domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::guild_record::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            guild_name: entity.guild_name,
            created_by_id: parse_snowflake("created_by_id", &entity.created_by_id)?,
            created_by_name: entity.created_by_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for resolving a guild record, creating it when missing.
///
/// The owner and guild name are only stored when the record is created; an existing
/// record is returned unchanged.
#[derive(Debug, Clone)]
pub struct FindOrCreateGuildRecordParam {
    pub guild_id: u64,
    pub guild_name: String,
    pub owner_id: u64,
    pub owner_name: String,
}
