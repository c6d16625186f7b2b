//! Guild record repository.
//!
//! Provides the `GuildRecordRepository` for resolving the root record of a guild,
//! lazily creating it together with its allow and deny lists.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::model::{
    access_list::AccessListKind,
    guild_record::{FindOrCreateGuildRecordParam, GuildRecord},
};

pub struct GuildRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the guild record, creating it and its two lists when missing.
    ///
    /// Idempotent: the guild row and both list rows are inserted with
    /// `ON CONFLICT DO NOTHING`, so concurrent first interactions of a guild never trip the
    /// unique indexes. An existing record keeps its original owner and name.
    ///
    /// # Arguments
    /// - `param` - Guild ID plus the owner and name stored on creation
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The existing or newly created record
    /// - `Err(DbErr)` - Database error, or a stored snowflake failed to parse
    pub async fn find_or_create(
        &self,
        param: FindOrCreateGuildRecordParam,
    ) -> Result<GuildRecord, DbErr> {
        let guild_id = param.guild_id.to_string();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        entity::prelude::GuildRecord::insert(entity::guild_record::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.clone()),
            guild_name: ActiveValue::Set(param.guild_name),
            created_by_id: ActiveValue::Set(param.owner_id.to_string()),
            created_by_name: ActiveValue::Set(param.owner_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_record::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        entity::prelude::AccessList::insert_many(
            [AccessListKind::Allow, AccessListKind::Deny].map(|kind| {
                entity::access_list::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    case_number: ActiveValue::Set(None),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
            }),
        )
        .on_conflict(
            OnConflict::columns([
                entity::access_list::Column::GuildId,
                entity::access_list::Column::Kind,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        let record = entity::prelude::GuildRecord::find()
            .filter(entity::guild_record::Column::GuildId.eq(guild_id.as_str()))
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Guild record {} not found after creation",
                guild_id
            )))?;

        txn.commit().await?;

        GuildRecord::from_entity(record)
    }
}
