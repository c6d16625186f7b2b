//! `/allowlist` and `/denylist` slash command handling.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, ResolvedOption, ResolvedValue,
};

use crate::{
    bot::{
        command::{modify_target, COMMAND_OPTION, TARGET_OPTION, TYPE_OPTION, VIEW_SUBCOMMAND},
        guild::GuildContext,
    },
    error::{access::AccessError, AppError},
    model::{
        access_list::{AccessAction, AccessListKind},
        payload::is_valid_command_name,
        view::{ViewFilter, ViewParam},
    },
    service::access_list::{render, view::AccessListViewService},
};

/// A parsed list subcommand.
#[derive(Debug, Clone, PartialEq)]
enum ListRequest {
    Modify {
        action: AccessAction,
        target_id: u64,
        command_name: Option<String>,
    },
    View {
        filter: ViewFilter,
        command_name: Option<String>,
    },
}

pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let list = AccessListKind::from_display_name(&command.data.name)
        .ok_or_else(|| AccessError::UnknownCommand(command.data.name.clone()))?;

    let request = match parse_request(&command.data.options()) {
        Ok(request) => request,
        Err(AccessError::InvalidCommandName(name)) => {
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(render::invalid_command_message(&name)),
                )
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match request {
        ListRequest::Modify {
            action,
            target_id,
            command_name,
        } => modify_target(db, ctx, command, list, action, target_id, command_name).await,
        ListRequest::View {
            filter,
            command_name,
        } => view(db, ctx, command, list, filter, command_name).await,
    }
}

async fn view(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    list: AccessListKind,
    filter: ViewFilter,
    command_name: Option<String>,
) -> Result<(), AppError> {
    let guild_id = command.guild_id.ok_or(AccessError::MissingGuild)?;
    let guild = GuildContext::load(ctx, guild_id).await?;

    let page = AccessListViewService::new(db)
        .page(ViewParam {
            guild: guild.snapshot.record_param(),
            list,
            filter,
            command_name,
            page: 0,
        })
        .await?;

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(render::page_message(page.as_ref())),
        )
        .await?;

    Ok(())
}

fn parse_request(options: &[ResolvedOption<'_>]) -> Result<ListRequest, AccessError> {
    let option = options
        .first()
        .ok_or_else(|| AccessError::MissingOption("subcommand".to_string()))?;

    match &option.value {
        ResolvedValue::SubCommandGroup(subcommands) => {
            let subcommand = subcommands
                .first()
                .ok_or_else(|| AccessError::MissingOption("subcommand".to_string()))?;
            let action = parse_action(subcommand.name)
                .ok_or_else(|| AccessError::UnknownCommand(subcommand.name.to_string()))?;
            let ResolvedValue::SubCommand(values) = &subcommand.value else {
                return Err(AccessError::UnknownCommand(subcommand.name.to_string()));
            };

            let target_id = values
                .iter()
                .filter(|value| value.name == TARGET_OPTION)
                .find_map(|value| match &value.value {
                    ResolvedValue::User(user, _) => Some(user.id.get()),
                    ResolvedValue::Role(role) => Some(role.id.get()),
                    ResolvedValue::Channel(channel) => Some(channel.id.get()),
                    _ => None,
                })
                .ok_or_else(|| AccessError::MissingOption(TARGET_OPTION.to_string()))?;

            Ok(ListRequest::Modify {
                action,
                target_id,
                command_name: command_name(string_option(values, COMMAND_OPTION))?,
            })
        }
        ResolvedValue::SubCommand(values) if option.name == VIEW_SUBCOMMAND => {
            let filter = match string_option(values, TYPE_OPTION) {
                Some(value) => ViewFilter::parse(value)
                    .ok_or_else(|| AccessError::MissingOption(TYPE_OPTION.to_string()))?,
                None => ViewFilter::All,
            };

            Ok(ListRequest::View {
                filter,
                command_name: command_name(string_option(values, COMMAND_OPTION))?,
            })
        }
        _ => Err(AccessError::UnknownCommand(option.name.to_string())),
    }
}

fn parse_action(name: &str) -> Option<AccessAction> {
    match name {
        "add" => Some(AccessAction::Add),
        "remove" => Some(AccessAction::Remove),
        _ => None,
    }
}

fn string_option<'a>(values: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    values
        .iter()
        .filter(|value| value.name == name)
        .find_map(|value| match value.value {
            ResolvedValue::String(s) => Some(s),
            _ => None,
        })
}

/// Scope of a request: a blank command name means guild-wide.
fn command_name(value: Option<&str>) -> Result<Option<String>, AccessError> {
    match value.map(str::trim).filter(|name| !name.is_empty()) {
        None => Ok(None),
        Some(name) if is_valid_command_name(name) => Ok(Some(name.to_string())),
        Some(name) => Err(AccessError::InvalidCommandName(name.to_string())),
    }
}
