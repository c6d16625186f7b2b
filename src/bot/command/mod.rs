//! Application command definitions and their handlers.
//!
//! Each list gets a slash command with `user`, `role` and `channel` groups holding
//! `add` and `remove` subcommands, plus a `view` subcommand. Adding and removing
//! accounts is also available from the user context menu. `/case` records moderation
//! actions and resolves case numbers.

pub mod access_list;
pub mod case;
pub mod context_menu;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, CommandType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, GuildId, Member, Permissions,
};

use crate::{
    bot::guild::GuildContext,
    error::{access::AccessError, AppError},
    model::{
        access_list::{AccessAction, AccessListKind, ModifySelectionParam},
        payload::MAX_COMMAND_NAME_LENGTH,
        target::Target,
    },
    service::{
        access_list::{render, AccessListService},
        classifier::classify,
    },
};

pub const TARGET_OPTION: &str = "target";
pub const COMMAND_OPTION: &str = "command";
pub const TYPE_OPTION: &str = "type";
pub const VIEW_SUBCOMMAND: &str = "view";

const LISTS: [AccessListKind; 2] = [AccessListKind::Allow, AccessListKind::Deny];

/// Builds every command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    let mut commands: Vec<CreateCommand> = LISTS.into_iter().map(slash_command).collect();
    commands.push(case::definition());
    commands.extend(context_menu::definitions());
    commands
}

fn slash_command(list: AccessListKind) -> CreateCommand {
    let groups = [
        ("user", "Accounts", CommandOptionType::User),
        ("role", "Roles", CommandOptionType::Role),
        ("channel", "Channels", CommandOptionType::Channel),
    ];

    let mut command = CreateCommand::new(list.display_name())
        .description(format!(
            "Manage the {} for the guild or a specific command",
            list
        ))
        .default_member_permissions(Permissions::MANAGE_GUILD);

    for (name, label, target_type) in groups {
        let mut group = CreateCommandOption::new(
            CommandOptionType::SubCommandGroup,
            name,
            format!("{} on the {}", label, list),
        );

        for action in [AccessAction::Add, AccessAction::Remove] {
            let description = match action {
                AccessAction::Add => format!("Add a {} to the {}", name, list),
                AccessAction::Remove => format!("Remove a {} from the {}", name, list),
            };
            group = group.add_sub_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, action.as_str(), description)
                    .add_sub_option(
                        CreateCommandOption::new(target_type, TARGET_OPTION, format!("The {}", name))
                            .required(true),
                    )
                    .add_sub_option(command_option()),
            );
        }

        command = command.add_option(group);
    }

    command.add_option(
        CreateCommandOption::new(
            CommandOptionType::SubCommand,
            VIEW_SUBCOMMAND,
            format!("View the {}", list),
        )
        .add_sub_option(
            CreateCommandOption::new(CommandOptionType::String, TYPE_OPTION, "Kind of targets to list")
                .add_string_choice("All", "all")
                .add_string_choice("Users", "account")
                .add_string_choice("Roles", "role")
                .add_string_choice("Channels", "channel"),
        )
        .add_sub_option(command_option()),
    )
}

fn command_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, COMMAND_OPTION, "The command name")
        .max_length(MAX_COMMAND_NAME_LENGTH as u16)
}

/// Dispatches an application command interaction.
///
/// # Returns
/// - `Ok(())` - The interaction was answered
/// - `Err(AppError)` - The interaction failed before a response was sent
pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.kind {
        CommandType::ChatInput if command.data.name == case::CASE_COMMAND => {
            case::handle(db, ctx, command).await
        }
        CommandType::ChatInput => access_list::handle(db, ctx, command).await,
        CommandType::User => context_menu::handle(db, ctx, command).await,
        _ => Err(AccessError::UnknownCommand(command.data.name.clone()).into()),
    }
}

/// Guild and invoking member of a command interaction.
fn invocation(command: &CommandInteraction) -> Result<(GuildId, &Member), AccessError> {
    let guild_id = command.guild_id.ok_or(AccessError::MissingGuild)?;
    let member = command.member.as_deref().ok_or(AccessError::MissingGuild)?;

    Ok((guild_id, member))
}

/// Runs a guarded add or remove for a target picked by a command.
///
/// The target is classified against the live guild, account and role targets pass
/// the hierarchy check, and the outcome is posted as the interaction response.
async fn modify_target(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    list: AccessListKind,
    action: AccessAction,
    target_id: u64,
    command_name: Option<String>,
) -> Result<(), AppError> {
    let (guild_id, member) = invocation(command)?;

    let mut guild = GuildContext::load(ctx, guild_id).await?;
    guild.merge_resolved(&command.data.resolved);
    guild.insert_member(member);

    let kind = classify(target_id, &guild.snapshot)?;

    let response = match guild.check_privilege(member, kind, target_id) {
        Some(rejection) => render::rejection_message(&rejection),
        None => {
            let name = guild
                .snapshot
                .name(kind, target_id)
                .map(str::to_string)
                .unwrap_or_else(|| target_id.to_string());

            let outcome = AccessListService::new(db)
                .modify_selection(ModifySelectionParam {
                    guild: guild.snapshot.record_param(),
                    target: Target {
                        id: target_id,
                        name,
                    },
                    kind,
                    list,
                    action,
                    command_name,
                    transfer: false,
                })
                .await?;

            render::outcome_message(&outcome)
        }
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}
