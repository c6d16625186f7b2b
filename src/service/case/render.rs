//! Discord messages for recorded moderation actions and case lookups.

use serenity::all::{
    CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateInteractionResponseMessage,
    Timestamp,
};

use crate::{
    model::{audit_action::AuditAction, case::CaseRecord},
    service::access_list::{
        render::{GOLD, GREEN, RED},
        view::{paginate, MAX_PAGE_LENGTH},
    },
};

pub const EMPTY_HISTORY_MESSAGE: &str = "No moderation actions have been recorded in this guild.";

/// Confirms a freshly recorded action.
pub fn recorded_message(action: &AuditAction) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().embed(action_embed(action).color(GREEN))
}

/// Renders what a case number refers to.
///
/// `None` means the guild has nothing carrying the case number.
pub fn case_message(
    case_number: i64,
    record: Option<&CaseRecord>,
) -> CreateInteractionResponseMessage {
    let embed = match record {
        None => return not_found_message(case_number),
        Some(CaseRecord::Action(action)) => action_embed(action).color(GOLD),
        Some(CaseRecord::AccessList { kind, .. }) => CreateEmbed::new()
            .title(format!("Case {}", case_number))
            .color(GOLD)
            .description(format!("Latest change to the {}.", kind)),
    };

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true)
}

pub fn deleted_message(action: &AuditAction) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(
            CreateEmbed::new()
                .title(format!("Case {}", action.case_number))
                .color(RED)
                .description(format!(
                    "{} of <@{}> has been deleted.",
                    action.action_type.label(),
                    action.target.id
                )),
        )
        .ephemeral(true)
}

pub fn not_found_message(case_number: i64) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(format!("Case {} does not exist in this guild.", case_number))
        .ephemeral(true)
}

/// Renders the most recent actions of a guild that fit in one embed.
///
/// `actions` are expected in case number order; the newest is listed first.
pub fn history_message(actions: &[AuditAction]) -> CreateInteractionResponseMessage {
    let entries: Vec<String> = actions.iter().rev().map(history_entry).collect();

    let Some(body) = paginate(&entries, MAX_PAGE_LENGTH).into_iter().next() else {
        return CreateInteractionResponseMessage::new()
            .content(EMPTY_HISTORY_MESSAGE)
            .ephemeral(true);
    };

    let shown = body.lines().count();

    CreateInteractionResponseMessage::new()
        .embed(
            CreateEmbed::new()
                .title("Moderation history")
                .color(GOLD)
                .description(body)
                .footer(CreateEmbedFooter::new(format!(
                    "Showing {} of {} actions",
                    shown,
                    entries.len()
                ))),
        )
        .ephemeral(true)
}

fn history_entry(action: &AuditAction) -> String {
    format!(
        "`{}` {} <@{}> by <@{}>",
        action.case_number,
        action.action_type.label(),
        action.target.id,
        action.executor.id
    )
}

fn action_embed(action: &AuditAction) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Case {}", action.case_number))
        .author(CreateEmbedAuthor::new(&action.target.name))
        .description(format!(
            "{} of <@{}>",
            action.action_type.label(),
            action.target.id
        ))
        .field("Moderator", format!("<@{}>", action.executor.id), true)
        .field(
            "Reason",
            action.reason.as_deref().unwrap_or("No reason given"),
            true,
        )
        .footer(CreateEmbedFooter::new(format!("User ID: {}", action.target.id)));

    if let Ok(timestamp) = Timestamp::from_unix_timestamp(action.created_at.timestamp()) {
        embed = embed.timestamp(timestamp);
    }

    embed
}
