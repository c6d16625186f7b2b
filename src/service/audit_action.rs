//! Audit trail of moderation actions.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::audit_action::AuditActionRepository,
    error::AppError,
    model::{
        audit_action::{AuditAction, CreateAuditActionParam},
        guild_record::FindOrCreateGuildRecordParam,
        target::Target,
    },
    service::guild_record::GuildRecordService,
    util::name::strip_discriminator,
};

pub struct AuditActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditActionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a moderation action under the next case number.
    ///
    /// The guild record is resolved first so an action can be the first thing ever
    /// stored for a guild. Target and executor names are stored without the legacy
    /// `#0` discriminator.
    ///
    /// # Arguments
    /// - `guild` - Guild the action was taken in
    /// - `param` - Target, executor, action type and reason; its `guild_id` is replaced
    ///   by the resolved guild's
    ///
    /// # Returns
    /// - `Ok(AuditAction)` - The stored action with its case number
    /// - `Err(AppError::DbErr)` - Database error; no case number was consumed
    pub async fn create(
        &self,
        guild: FindOrCreateGuildRecordParam,
        param: CreateAuditActionParam,
    ) -> Result<AuditAction, AppError> {
        let guild = GuildRecordService::new(self.db).find_or_create(guild).await?;

        let param = CreateAuditActionParam {
            guild_id: guild.guild_id,
            target: Target {
                id: param.target.id,
                name: strip_discriminator(&param.target.name),
            },
            executor: Target {
                id: param.executor.id,
                name: strip_discriminator(&param.executor.name),
            },
            ..param
        };

        let action = AuditActionRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Case {}: {} of {} by {} in guild {}",
            action.case_number,
            action.action_type.as_str(),
            action.target.id,
            action.executor.id,
            action.guild_id
        );

        Ok(action)
    }

    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<AuditAction>, AppError> {
        Ok(AuditActionRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?)
    }

    /// Deletes a guild's audit action by its case number.
    ///
    /// Case numbers are shared by every guild, so an action recorded in another guild
    /// is treated as missing. The case number is not reused.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the deletion is requested from
    /// - `case_number` - Case number of the action
    ///
    /// # Returns
    /// - `Ok(AuditAction)` - The removed action
    /// - `Err(AppError::NotFound)` - The guild has no action with the case number
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn delete_by_case_number(
        &self,
        guild_id: u64,
        case_number: i64,
    ) -> Result<AuditAction, AppError> {
        let repo = AuditActionRepository::new(self.db);

        let action = repo
            .find_by_case_number(case_number)
            .await?
            .filter(|action| action.guild_id == guild_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("No audit action with case number {}", case_number))
            })?;

        if !repo.delete_by_case_number(case_number).await? {
            return Err(AppError::NotFound(format!(
                "No audit action with case number {}",
                case_number
            )));
        }

        tracing::info!(
            "Audit action of case {} deleted in guild {}",
            case_number,
            guild_id
        );

        Ok(action)
    }
}
