//! Allow and deny list orchestration.
//!
//! `AccessListService::modify_selection` is the single entry point for changing a list.
//! It re-reads both lists on every call and decides between rejecting the request,
//! committing it, or asking the moderator to confirm a move when the target sits on
//! the opposite list. The lists never hold the same target in the same scope at once:
//! an add that would cause that is turned into a confirmation prompt, and a confirmed
//! move (see `transfer`) removes from the opposite list before adding.

pub mod render;
pub mod transfer;
pub mod view;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::access_list::AccessListRepository,
    error::AppError,
    model::{
        access_list::{
            AccessAction, AccessEntryParam, AccessList, AccessListKind, ModifySelectionParam,
        },
        outcome::{ModifyOutcome, OutcomeContext},
        payload::MovePayload,
        target::{Target, TargetKind},
    },
    service::guild_record::GuildRecordService,
    util::name::strip_discriminator,
};

pub struct AccessListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a guild's list.
    ///
    /// # Returns
    /// - `Ok(AccessList)` - The list with its selections
    /// - `Err(AppError::NotFound)` - The guild has no list of this kind
    /// - `Err(AppError::DbErr)` - Database error during the query
    pub async fn get(&self, guild_id: u64, kind: AccessListKind) -> Result<AccessList, AppError> {
        AccessListRepository::new(self.db)
            .get(guild_id, kind)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No {} for guild {}",
                    kind.display_name(),
                    guild_id
                ))
            })
    }

    /// Whether a target is on a list within a scope.
    pub async fn exists(
        &self,
        guild_id: u64,
        list: AccessListKind,
        kind: TargetKind,
        target_id: u64,
        command_name: Option<&str>,
    ) -> Result<bool, AppError> {
        Ok(AccessListRepository::new(self.db)
            .exists(guild_id, list, kind, target_id, command_name)
            .await?)
    }

    /// Adds a target to, or removes it from, a list.
    ///
    /// Unless `param.transfer` is set, the request is checked against freshly read state:
    /// - an add of a target already on the list returns `AlreadyPresent`
    /// - a remove of a target not on the list returns `NotPresent`
    /// - an add of a target on the opposite list returns `ConflictPrompt` carrying the
    ///   payload of the confirmation button
    ///
    /// None of these allocate a case number. Otherwise the mutation is committed and
    /// `Committed` carries its case number. With `transfer` set the checks are skipped.
    ///
    /// # Arguments
    /// - `param` - Guild, target, list, action and optional command scope
    ///
    /// # Returns
    /// - `Ok(ModifyOutcome)` - The branch taken
    /// - `Err(AppError::DbErr)` - Database error; nothing was committed
    pub async fn modify_selection(
        &self,
        param: ModifySelectionParam,
    ) -> Result<ModifyOutcome, AppError> {
        let guild = GuildRecordService::new(self.db)
            .find_or_create(param.guild)
            .await?;
        let repo = AccessListRepository::new(self.db);
        let command_name = param.command_name.as_deref();

        let context = OutcomeContext {
            guild_id: guild.guild_id,
            target: Target {
                id: param.target.id,
                name: strip_discriminator(&param.target.name),
            },
            kind: param.kind,
            list: param.list,
            command_name: param.command_name.clone(),
        };

        if !param.transfer {
            let present = repo
                .exists(
                    guild.guild_id,
                    param.list,
                    param.kind,
                    param.target.id,
                    command_name,
                )
                .await?;

            match param.action {
                AccessAction::Add if present => {
                    tracing::debug!(
                        "{} {} already in {} of guild {}",
                        param.kind,
                        param.target.id,
                        param.list,
                        guild.guild_id
                    );
                    return Ok(ModifyOutcome::AlreadyPresent(context));
                }
                AccessAction::Remove if !present => {
                    tracing::debug!(
                        "{} {} not in {} of guild {}",
                        param.kind,
                        param.target.id,
                        param.list,
                        guild.guild_id
                    );
                    return Ok(ModifyOutcome::NotPresent(context));
                }
                _ => {}
            }

            if param.action == AccessAction::Add
                && repo
                    .exists(
                        guild.guild_id,
                        param.list.opposite(),
                        param.kind,
                        param.target.id,
                        command_name,
                    )
                    .await?
            {
                tracing::debug!(
                    "{} {} is in the {} of guild {}, asking to move",
                    param.kind,
                    param.target.id,
                    param.list.opposite(),
                    guild.guild_id
                );
                let payload = MovePayload {
                    list: param.list,
                    kind: param.kind,
                    target_id: param.target.id,
                    command_name: param.command_name.clone(),
                };
                return Ok(ModifyOutcome::ConflictPrompt { context, payload });
            }
        }

        let entry = AccessEntryParam {
            guild_id: guild.guild_id,
            list: param.list,
            kind: param.kind,
            target: context.target.clone(),
            command_name: param.command_name.clone(),
        };

        let case_number = match param.action {
            AccessAction::Add => repo.add(&entry).await?,
            AccessAction::Remove => repo.remove(&entry).await?,
        };

        tracing::info!(
            "Case {}: {} {} {} the {} of guild {}{}",
            case_number,
            param.kind,
            param.target.id,
            match param.action {
                AccessAction::Add => "added to",
                AccessAction::Remove => "removed from",
            },
            param.list,
            guild.guild_id,
            command_name
                .map(|c| format!(" for command {}", c))
                .unwrap_or_default()
        );

        Ok(ModifyOutcome::Committed {
            context,
            action: param.action,
            case_number,
        })
    }
}
