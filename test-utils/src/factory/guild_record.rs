//! Guild record factory for creating test guilds together with their access lists.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild records with customizable fields.
///
/// Building a guild record also inserts its `allow` and `deny` access list rows,
/// mirroring what the guild record repository does on first reference to a guild.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_record::GuildRecordFactory;
///
/// let guild = GuildRecordFactory::new(&db)
///     .guild_id("987654321")
///     .guild_name("Moderators")
///     .build()
///     .await?;
/// ```
pub struct GuildRecordFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    guild_name: String,
    created_by_id: String,
    created_by_name: String,
    with_lists: bool,
}

impl<'a> GuildRecordFactory<'a> {
    /// Creates a new GuildRecordFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented snowflake-like id
    /// - guild_name: `"Guild {id}"`
    /// - created_by_id / created_by_name: `"1"` / `"owner"`
    /// - access lists: created
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            guild_name: format!("Guild {}", id),
            created_by_id: "1".to_string(),
            created_by_name: "owner".to_string(),
            with_lists: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn guild_name(mut self, guild_name: impl Into<String>) -> Self {
        self.guild_name = guild_name.into();
        self
    }

    pub fn created_by(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.created_by_id = id.into();
        self.created_by_name = name.into();
        self
    }

    /// Skips creation of the allow and deny list rows.
    pub fn without_lists(mut self) -> Self {
        self.with_lists = false;
        self
    }

    /// Builds and inserts the guild record (and its access lists) into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_record::Model)` - Created guild record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_record::Model, DbErr> {
        let now = Utc::now();
        let guild = entity::guild_record::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.clone()),
            guild_name: ActiveValue::Set(self.guild_name),
            created_by_id: ActiveValue::Set(self.created_by_id),
            created_by_name: ActiveValue::Set(self.created_by_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if self.with_lists {
            for kind in ["allow", "deny"] {
                entity::access_list::ActiveModel {
                    guild_id: ActiveValue::Set(self.guild_id.clone()),
                    kind: ActiveValue::Set(kind.to_string()),
                    case_number: ActiveValue::Set(None),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(guild)
    }
}

/// Creates a guild record with default values and both access lists.
///
/// Shorthand for `GuildRecordFactory::new(db).build().await`.
pub async fn create_guild_record(
    db: &DatabaseConnection,
) -> Result<entity::guild_record::Model, DbErr> {
    GuildRecordFactory::new(db).build().await
}
