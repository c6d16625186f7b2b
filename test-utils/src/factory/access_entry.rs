//! Access entry factory for remembering targets on a guild's access lists.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test access entries.
///
/// Defaults to a guild-wide allow list entry for an account. The owning guild record
/// must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let entry = AccessEntryFactory::new(&db, &guild.guild_id)
///     .list_kind("deny")
///     .target_kind("role")
///     .target_id("555")
///     .command_name(Some("kick"))
///     .build()
///     .await?;
/// ```
pub struct AccessEntryFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    list_kind: String,
    command_name: Option<String>,
    target_kind: String,
    target_id: String,
    name: String,
}

impl<'a> AccessEntryFactory<'a> {
    /// Creates a new AccessEntryFactory with default values.
    ///
    /// Defaults:
    /// - list_kind: `"allow"`
    /// - command_name: `None` (guild-wide)
    /// - target_kind: `"account"`
    /// - target_id: auto-incremented snowflake-like id
    /// - name: `"Target {id}"`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            list_kind: "allow".to_string(),
            command_name: None,
            target_kind: "account".to_string(),
            target_id: id.to_string(),
            name: format!("Target {}", id),
        }
    }

    pub fn list_kind(mut self, list_kind: impl Into<String>) -> Self {
        self.list_kind = list_kind.into();
        self
    }

    pub fn command_name(mut self, command_name: Option<&str>) -> Self {
        self.command_name = command_name.map(str::to_string);
        self
    }

    pub fn target_kind(mut self, target_kind: impl Into<String>) -> Self {
        self.target_kind = target_kind.into();
        self
    }

    pub fn target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the access entry into the database.
    pub async fn build(self) -> Result<entity::access_entry::Model, DbErr> {
        entity::access_entry::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            list_kind: ActiveValue::Set(self.list_kind),
            command_name: ActiveValue::Set(self.command_name),
            target_kind: ActiveValue::Set(self.target_kind),
            target_id: ActiveValue::Set(self.target_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild-wide allow list account entry with default values.
pub async fn create_access_entry(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::access_entry::Model, DbErr> {
    AccessEntryFactory::new(db, guild_id).build().await
}
