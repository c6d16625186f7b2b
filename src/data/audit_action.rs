//! Audit action repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    data::case_counter::CaseCounterRepository,
    model::audit_action::{AuditAction, CreateAuditActionParam},
};

pub struct AuditActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an audit action under a freshly allocated case number.
    ///
    /// The allocation and the insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(AuditAction)` - The stored action with its case number
    /// - `Err(DbErr)` - Database error during allocation or insert
    pub async fn create(&self, param: CreateAuditActionParam) -> Result<AuditAction, DbErr> {
        let txn = self.db.begin().await?;
        let case_number = CaseCounterRepository::new(&txn).next_case_number().await?;
        let now = Utc::now();

        let action = entity::audit_action::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            target_id: ActiveValue::Set(param.target.id.to_string()),
            target_name: ActiveValue::Set(param.target.name),
            executor_id: ActiveValue::Set(param.executor.id.to_string()),
            executor_name: ActiveValue::Set(param.executor.name),
            action_type: ActiveValue::Set(param.action_type.as_str().to_string()),
            reason: ActiveValue::Set(param.reason),
            case_number: ActiveValue::Set(case_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        AuditAction::from_entity(action)
    }

    /// Gets all audit actions of a guild in case number order.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<AuditAction>, DbErr> {
        entity::prelude::AuditAction::find()
            .filter(entity::audit_action::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::audit_action::Column::CaseNumber)
            .all(self.db)
            .await?
            .into_iter()
            .map(AuditAction::from_entity)
            .collect()
    }

    /// Finds the audit action carrying a case number.
    pub async fn find_by_case_number(
        &self,
        case_number: i64,
    ) -> Result<Option<AuditAction>, DbErr> {
        entity::prelude::AuditAction::find()
            .filter(entity::audit_action::Column::CaseNumber.eq(case_number))
            .one(self.db)
            .await?
            .map(AuditAction::from_entity)
            .transpose()
    }

    /// Deletes the audit action carrying a case number.
    ///
    /// # Returns
    /// - `Ok(true)` - An action was removed
    /// - `Ok(false)` - No action carries the case number
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_case_number(&self, case_number: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::AuditAction::delete_many()
            .filter(entity::audit_action::Column::CaseNumber.eq(case_number))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
