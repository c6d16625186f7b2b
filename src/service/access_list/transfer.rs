//! Confirmed moves between the allow and deny lists.
//!
//! A move runs in two phases, each committed on its own: phase A removes the target
//! from the opposite list, phase B adds it to the requested list. Removal always comes
//! first, so a failure between the phases leaves the target on neither list rather
//! than on both.
//!
//! Each phase re-reads the live state before committing. A confirmation may be clicked
//! long after it was shown, so phase A only removes a target that is still on the
//! opposite list and phase B only adds a target that is not already on the requested
//! list. A stale confirmation therefore never reintroduces a duplicate.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::access_list::AccessListRepository,
    error::AppError,
    model::{
        access_list::{AccessAction, ConfirmMoveParam, ModifySelectionParam},
        outcome::{MoveOutcome, OutcomeContext},
        target::Target,
    },
    service::{access_list::AccessListService, guild_record::GuildRecordService},
    util::name::strip_discriminator,
};

pub struct MoveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a confirmed move.
    ///
    /// The target's name is taken from Discord when it can still be resolved, otherwise
    /// from the entry stored on the opposite list, otherwise its ID.
    ///
    /// # Arguments
    /// - `param` - Guild, decoded confirmation payload and the live target name
    ///
    /// # Returns
    /// - `Ok(MoveOutcome)` - Case numbers of the phases that committed
    /// - `Err(AppError::DbErr)` - Database error; phases committed before the error stay
    ///   committed
    pub async fn confirm(&self, param: ConfirmMoveParam) -> Result<MoveOutcome, AppError> {
        let payload = param.payload;
        let from = payload.list.opposite();
        let command_name = payload.command_name.as_deref();

        let guild = GuildRecordService::new(self.db)
            .find_or_create(param.guild.clone())
            .await?;
        let repo = AccessListRepository::new(self.db);

        let stored = repo
            .find_entry(
                guild.guild_id,
                from,
                payload.kind,
                payload.target_id,
                command_name,
            )
            .await?;

        let target = Target {
            id: payload.target_id,
            name: param
                .target_name
                .map(|name| strip_discriminator(&name))
                .or_else(|| stored.as_ref().map(|entry| entry.target.name.clone()))
                .unwrap_or_else(|| payload.target_id.to_string()),
        };

        let service = AccessListService::new(self.db);
        let phase = |list, action| ModifySelectionParam {
            guild: param.guild.clone(),
            target: target.clone(),
            kind: payload.kind,
            list,
            action,
            command_name: payload.command_name.clone(),
            transfer: true,
        };

        let removed_case = if stored.is_some() {
            service
                .modify_selection(phase(from, AccessAction::Remove))
                .await?
                .case_number()
        } else {
            tracing::debug!(
                "{} {} already left the {} of guild {}, skipping removal",
                payload.kind,
                payload.target_id,
                from,
                guild.guild_id
            );
            None
        };

        let already_added = service
            .exists(
                guild.guild_id,
                payload.list,
                payload.kind,
                payload.target_id,
                command_name,
            )
            .await?;

        let added_case = if already_added {
            tracing::debug!(
                "{} {} already in the {} of guild {}, skipping addition",
                payload.kind,
                payload.target_id,
                payload.list,
                guild.guild_id
            );
            None
        } else {
            service
                .modify_selection(phase(payload.list, AccessAction::Add))
                .await?
                .case_number()
        };

        Ok(MoveOutcome {
            context: OutcomeContext {
                guild_id: guild.guild_id,
                target,
                kind: payload.kind,
                list: payload.list,
                command_name: payload.command_name.clone(),
            },
            removed_case,
            added_case,
        })
    }
}
