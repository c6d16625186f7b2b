//! Access list repository.
//!
//! Reads lists as `AccessList` domain models and commits add/remove mutations. Each
//! mutation allocates a case number, writes the entry change and stamps the list row
//! in one transaction. Guard checks (duplicate, missing, cross-list conflict) are the
//! caller's responsibility; this layer writes unconditionally.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    data::case_counter::CaseCounterRepository,
    model::{
        access_list::{AccessAction, AccessEntry, AccessEntryParam, AccessList, AccessListKind},
        target::TargetKind,
    },
    util::parse::parse_snowflake,
};

/// Repository providing database operations for allow and deny lists.
pub struct AccessListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessListRepository<'a> {
    /// Creates a new AccessListRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a list with all of its entries.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the list belongs to
    /// - `kind` - Allow or deny list
    ///
    /// # Returns
    /// - `Ok(Some(AccessList))` - The list with guild-wide and command-scoped selections
    /// - `Ok(None)` - The guild has no list of this kind (guild never referenced)
    /// - `Err(DbErr)` - Database error, or a stored value failed to parse
    pub async fn get(
        &self,
        guild_id: u64,
        kind: AccessListKind,
    ) -> Result<Option<AccessList>, DbErr> {
        let Some(list) = entity::prelude::AccessList::find()
            .filter(entity::access_list::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::access_list::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let entries = entity::prelude::AccessEntry::find()
            .filter(entity::access_entry::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::access_entry::Column::ListKind.eq(kind.as_str()))
            .order_by_asc(entity::access_entry::Column::Id)
            .all(self.db)
            .await?;

        AccessList::from_entities(list, entries).map(Some)
    }

    /// Checks whether a target is on a list within a scope.
    ///
    /// With `command_name` set, only entries of that command match; without it, only
    /// guild-wide entries match.
    pub async fn exists(
        &self,
        guild_id: u64,
        list: AccessListKind,
        kind: TargetKind,
        target_id: u64,
        command_name: Option<&str>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::AccessEntry::find()
            .filter(entry_condition(guild_id, list, kind, target_id, command_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the stored entry of a target within a scope.
    ///
    /// # Returns
    /// - `Ok(Some(AccessEntry))` - Earliest matching entry
    /// - `Ok(None)` - The target is not on the list in this scope
    /// - `Err(DbErr)` - Database error or unparsable stored value
    pub async fn find_entry(
        &self,
        guild_id: u64,
        list: AccessListKind,
        kind: TargetKind,
        target_id: u64,
        command_name: Option<&str>,
    ) -> Result<Option<AccessEntry>, DbErr> {
        entity::prelude::AccessEntry::find()
            .filter(entry_condition(guild_id, list, kind, target_id, command_name))
            .order_by_asc(entity::access_entry::Column::Id)
            .one(self.db)
            .await?
            .map(AccessEntry::from_entity)
            .transpose()
    }

    /// Adds a target to a list and returns the allocated case number.
    ///
    /// Not idempotent: adding a target that is already present stores a second row.
    pub async fn add(&self, param: &AccessEntryParam) -> Result<i64, DbErr> {
        self.commit(param, AccessAction::Add).await
    }

    /// Removes a target from a list and returns the allocated case number.
    ///
    /// Removing an absent target succeeds and still consumes a case number.
    pub async fn remove(&self, param: &AccessEntryParam) -> Result<i64, DbErr> {
        self.commit(param, AccessAction::Remove).await
    }

    /// Finds the list whose latest mutation carries the case number.
    ///
    /// # Returns
    /// - `Ok(Some((guild_id, kind)))` - The list stamped with this case number
    /// - `Ok(None)` - No list currently carries the case number
    /// - `Err(DbErr)` - Database error or unparsable stored value
    pub async fn find_by_case_number(
        &self,
        case_number: i64,
    ) -> Result<Option<(u64, AccessListKind)>, DbErr> {
        let Some(list) = entity::prelude::AccessList::find()
            .filter(entity::access_list::Column::CaseNumber.eq(case_number))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some((
            parse_snowflake("guild_id", &list.guild_id)?,
            AccessListKind::from_stored(&list.kind)?,
        )))
    }

    async fn commit(&self, param: &AccessEntryParam, action: AccessAction) -> Result<i64, DbErr> {
        let txn = self.db.begin().await?;
        let case_number = CaseCounterRepository::new(&txn).next_case_number().await?;
        let now = Utc::now();

        match action {
            AccessAction::Add => {
                entity::access_entry::ActiveModel {
                    guild_id: ActiveValue::Set(param.guild_id.to_string()),
                    list_kind: ActiveValue::Set(param.list.as_str().to_string()),
                    command_name: ActiveValue::Set(param.command_name.clone()),
                    target_kind: ActiveValue::Set(param.kind.as_str().to_string()),
                    target_id: ActiveValue::Set(param.target.id.to_string()),
                    name: ActiveValue::Set(param.target.name.clone()),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
            AccessAction::Remove => {
                entity::prelude::AccessEntry::delete_many()
                    .filter(entry_condition(
                        param.guild_id,
                        param.list,
                        param.kind,
                        param.target.id,
                        param.command_name.as_deref(),
                    ))
                    .exec(&txn)
                    .await?;
            }
        }

        let stamped = entity::prelude::AccessList::update_many()
            .col_expr(
                entity::access_list::Column::CaseNumber,
                Expr::value(case_number),
            )
            .col_expr(entity::access_list::Column::UpdatedAt, Expr::value(now))
            .filter(entity::access_list::Column::GuildId.eq(param.guild_id.to_string()))
            .filter(entity::access_list::Column::Kind.eq(param.list.as_str()))
            .exec(&txn)
            .await?;

        if stamped.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "No {} list for guild {}",
                param.list.as_str(),
                param.guild_id
            )));
        }

        txn.commit().await?;

        Ok(case_number)
    }
}

/// Matches the entries of one target within one list scope.
fn entry_condition(
    guild_id: u64,
    list: AccessListKind,
    kind: TargetKind,
    target_id: u64,
    command_name: Option<&str>,
) -> Condition {
    let scope = match command_name {
        Some(name) => entity::access_entry::Column::CommandName.eq(name),
        None => entity::access_entry::Column::CommandName.is_null(),
    };

    Condition::all()
        .add(entity::access_entry::Column::GuildId.eq(guild_id.to_string()))
        .add(entity::access_entry::Column::ListKind.eq(list.as_str()))
        .add(entity::access_entry::Column::TargetKind.eq(kind.as_str()))
        .add(entity::access_entry::Column::TargetId.eq(target_id.to_string()))
        .add(scope)
}
