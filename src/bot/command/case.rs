//! `/case` slash command: records moderation actions and resolves case numbers.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, GuildId, Member, Permissions,
    ResolvedOption, ResolvedValue,
};

use crate::{
    bot::{
        command::{invocation, TARGET_OPTION},
        guild::GuildContext,
    },
    error::{access::AccessError, AppError},
    model::{
        audit_action::{AuditActionType, CreateAuditActionParam},
        target::{Target, TargetKind},
    },
    service::{
        access_list::render::rejection_message,
        audit_action::AuditActionService,
        case::{render, CaseLookupService},
    },
};

pub const CASE_COMMAND: &str = "case";

const ACTION_OPTION: &str = "action";
const REASON_OPTION: &str = "reason";
const NUMBER_OPTION: &str = "number";

const MAX_REASON_LENGTH: u16 = 512;

const ACTION_TYPES: [AuditActionType; 3] = [
    AuditActionType::Mute,
    AuditActionType::Kick,
    AuditActionType::Ban,
];

#[derive(Debug, Clone, PartialEq)]
enum CaseRequest {
    Record {
        target_id: u64,
        action_type: AuditActionType,
        reason: Option<String>,
    },
    View {
        case_number: i64,
    },
    History,
    Delete {
        case_number: i64,
    },
}

pub fn definition() -> CreateCommand {
    let mut action = CreateCommandOption::new(
        CommandOptionType::String,
        ACTION_OPTION,
        "The action taken",
    )
    .required(true);
    for action_type in ACTION_TYPES {
        action = action.add_string_choice(action_type.label(), action_type.as_str());
    }

    CreateCommand::new(CASE_COMMAND)
        .description("Record moderation actions and look up case numbers")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "record",
                "Record a moderation action under a new case number",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, TARGET_OPTION, "The user")
                    .required(true),
            )
            .add_sub_option(action)
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, REASON_OPTION, "Why")
                    .max_length(MAX_REASON_LENGTH),
            ),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "view", "Look up a case")
                .add_sub_option(number_option()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "history",
            "List the latest recorded actions",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "delete",
                "Delete a recorded action",
            )
            .add_sub_option(number_option()),
        )
}

fn number_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, NUMBER_OPTION, "The case number")
        .min_int_value(1)
        .required(true)
}

pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (guild_id, member) = invocation(command)?;

    let response = match parse_request(&command.data.options())? {
        CaseRequest::Record {
            target_id,
            action_type,
            reason,
        } => {
            record(
                db,
                ctx,
                command,
                (guild_id, member),
                target_id,
                action_type,
                reason,
            )
            .await?
        }
        CaseRequest::View { case_number } => {
            let record = CaseLookupService::new(db)
                .find(guild_id.get(), case_number)
                .await?;
            render::case_message(case_number, record.as_ref())
        }
        CaseRequest::History => {
            let actions = AuditActionService::new(db)
                .get_by_guild_id(guild_id.get())
                .await?;
            render::history_message(&actions)
        }
        CaseRequest::Delete { case_number } => match AuditActionService::new(db)
            .delete_by_case_number(guild_id.get(), case_number)
            .await
        {
            Ok(action) => render::deleted_message(&action),
            Err(AppError::NotFound(_)) => render::not_found_message(case_number),
            Err(e) => return Err(e),
        },
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Records an action against a user the moderator outranks.
async fn record(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    (guild_id, member): (GuildId, &Member),
    target_id: u64,
    action_type: AuditActionType,
    reason: Option<String>,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let mut guild = GuildContext::load(ctx, guild_id).await?;
    guild.merge_resolved(&command.data.resolved);
    guild.insert_member(member);

    if let Some(rejection) = guild.check_privilege(member, TargetKind::Account, target_id) {
        return Ok(rejection_message(&rejection));
    }

    let target_name = guild
        .snapshot
        .name(TargetKind::Account, target_id)
        .map(str::to_string)
        .unwrap_or_else(|| target_id.to_string());

    let action = AuditActionService::new(db)
        .create(
            guild.snapshot.record_param(),
            CreateAuditActionParam {
                guild_id: guild_id.get(),
                target: Target {
                    id: target_id,
                    name: target_name,
                },
                executor: Target {
                    id: member.user.id.get(),
                    name: member.user.tag(),
                },
                action_type,
                reason,
            },
        )
        .await?;

    Ok(render::recorded_message(&action))
}

fn parse_request(options: &[ResolvedOption<'_>]) -> Result<CaseRequest, AccessError> {
    let option = options
        .first()
        .ok_or_else(|| AccessError::MissingOption("subcommand".to_string()))?;
    let ResolvedValue::SubCommand(values) = &option.value else {
        return Err(AccessError::UnknownCommand(option.name.to_string()));
    };

    let case_number = || {
        values
            .iter()
            .filter(|value| value.name == NUMBER_OPTION)
            .find_map(|value| match value.value {
                ResolvedValue::Integer(number) => Some(number),
                _ => None,
            })
            .ok_or_else(|| AccessError::MissingOption(NUMBER_OPTION.to_string()))
    };

    match option.name {
        "record" => {
            let target_id = values
                .iter()
                .filter(|value| value.name == TARGET_OPTION)
                .find_map(|value| match &value.value {
                    ResolvedValue::User(user, _) => Some(user.id.get()),
                    _ => None,
                })
                .ok_or_else(|| AccessError::MissingOption(TARGET_OPTION.to_string()))?;
            let action_type = string_option(values, ACTION_OPTION)
                .and_then(AuditActionType::parse)
                .ok_or_else(|| AccessError::MissingOption(ACTION_OPTION.to_string()))?;

            Ok(CaseRequest::Record {
                target_id,
                action_type,
                reason: reason(string_option(values, REASON_OPTION)),
            })
        }
        "view" => Ok(CaseRequest::View {
            case_number: case_number()?,
        }),
        "history" => Ok(CaseRequest::History),
        "delete" => Ok(CaseRequest::Delete {
            case_number: case_number()?,
        }),
        other => Err(AccessError::UnknownCommand(other.to_string())),
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

fn reason(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(str::to_string)
}
