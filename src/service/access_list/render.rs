//! Discord messages for access list outcomes.
//!
//! Every function returns a response message built only from the data it is given;
//! nothing here queries Discord or the database.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedAuthor,
    CreateEmbedFooter, CreateInteractionResponseMessage, Timestamp,
};

use crate::{
    model::{
        access_list::AccessAction,
        outcome::{ModifyOutcome, MoveOutcome, OutcomeContext},
        payload::{PageControl, PagePayload, MAX_COMMAND_NAME_LENGTH, MOVE_CANCEL_ID},
        view::ListPage,
    },
    service::hierarchy::HierarchyRejection,
};

pub(crate) const GOLD: u32 = 0xF1C40F;
pub(crate) const GREEN: u32 = 0x57F287;
pub(crate) const RED: u32 = 0xED4245;

pub const FAILURE_MESSAGE: &str = "Something went wrong while processing this request.";
pub const EMPTY_LISTING_MESSAGE: &str = "Nothing to view yet in this query selection.";

/// Renders the result of a guarded add or remove.
pub fn outcome_message(outcome: &ModifyOutcome) -> CreateInteractionResponseMessage {
    match outcome {
        ModifyOutcome::AlreadyPresent(context) => ephemeral(format!(
            "{} is already in the {}.",
            context.mention(),
            context.list
        )),
        ModifyOutcome::NotPresent(context) => ephemeral(format!(
            "{} does not exist in the {}.",
            context.mention(),
            context.list
        )),
        ModifyOutcome::ConflictPrompt { context, payload } => {
            let embed = CreateEmbed::new()
                .title("Confirmation")
                .color(GOLD)
                .author(CreateEmbedAuthor::new(&context.target.name))
                .description(format!(
                    "{} exists in the {} {} database. Do you want to move this data to the {}?",
                    context.mention(),
                    context.list.opposite(),
                    scope_word(context),
                    context.list
                ))
                .footer(id_footer(context));

            let buttons = CreateActionRow::Buttons(vec![
                CreateButton::new(payload.encode())
                    .label("Yes")
                    .style(ButtonStyle::Success),
                CreateButton::new(MOVE_CANCEL_ID)
                    .label("No")
                    .style(ButtonStyle::Danger),
            ]);

            CreateInteractionResponseMessage::new()
                .embed(embed)
                .components(vec![buttons])
                .ephemeral(true)
        }
        ModifyOutcome::Committed {
            context,
            action,
            case_number,
        } => {
            let verb = match action {
                AccessAction::Add => "added to",
                AccessAction::Remove => "removed from",
            };
            let mut embed = success_embed(context)
                .description(format!(
                    "{} has been {} the {}",
                    context.mention(),
                    verb,
                    context.list
                ))
                .field("Case", case_number.to_string(), true);

            if let Some(command_name) = &context.command_name {
                embed = embed.field("Command", format!("`{}`", command_name), true);
            }

            CreateInteractionResponseMessage::new().embed(embed)
        }
    }
}

/// Renders the result of a confirmed move, replacing the confirmation prompt.
pub fn move_message(outcome: &MoveOutcome) -> CreateInteractionResponseMessage {
    let context = &outcome.context;

    let embed = match (outcome.removed_case, outcome.added_case) {
        (None, None) => success_embed(context).description(format!(
            "{} is already in the {}.",
            context.mention(),
            context.list
        )),
        (removed, added) => {
            let cases = [removed, added]
                .into_iter()
                .flatten()
                .map(|case| case.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            success_embed(context)
                .description(format!(
                    "{} has been moved from the {} to the {} {}",
                    context.mention(),
                    context.list.opposite(),
                    context.list,
                    scope_word(context)
                ))
                .field("Case", cases, true)
        }
    };

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(Vec::new())
}

/// Replaces a confirmation prompt after the moderator declined it.
pub fn cancelled_message() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(
            CreateEmbed::new()
                .title("Cancelled")
                .color(RED)
                .description("Action cancelled."),
        )
        .components(Vec::new())
}

pub fn failure_message() -> CreateInteractionResponseMessage {
    ephemeral(FAILURE_MESSAGE.to_string())
}

pub fn invalid_command_message(name: &str) -> CreateInteractionResponseMessage {
    ephemeral(format!(
        "`{}` is not a valid command name. Use up to {} letters, digits, `-` or `_`.",
        name, MAX_COMMAND_NAME_LENGTH
    ))
}

pub fn rejection_message(rejection: &HierarchyRejection) -> CreateInteractionResponseMessage {
    ephemeral(rejection.message().to_string())
}

/// Renders one page of a listing with its navigation buttons.
///
/// `None` renders the empty listing message.
pub fn page_message(page: Option<&ListPage>) -> CreateInteractionResponseMessage {
    let Some(page) = page else {
        return CreateInteractionResponseMessage::new()
            .content(EMPTY_LISTING_MESSAGE)
            .embeds(Vec::new())
            .components(Vec::new());
    };

    let scope = match &page.command_name {
        Some(command_name) => format!("{}: {}", page.list, command_name),
        None => page.list.to_string(),
    };

    let embed = CreateEmbed::new()
        .title(format!("{} Cases", page.guild_name))
        .author(CreateEmbedAuthor::new(scope))
        .color(GOLD)
        .description(&page.body)
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{}",
            page.index + 1,
            page.total
        )))
        .timestamp(Timestamp::now());

    let buttons = navigation(page.index, page.total)
        .into_iter()
        .map(|(control, target, disabled)| {
            let payload = PagePayload {
                list: page.list,
                filter: page.filter,
                page: target,
                control,
                command_name: page.command_name.clone(),
            };
            CreateButton::new(payload.encode())
                .label(control_label(control))
                .style(ButtonStyle::Secondary)
                .disabled(disabled)
        })
        .collect();

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(vec![CreateActionRow::Buttons(buttons)])
}

/// Target page and disabled state of each navigation button.
pub fn navigation(index: usize, total: usize) -> [(PageControl, usize, bool); 4] {
    let last = total.saturating_sub(1);
    let at_start = index == 0;
    let at_end = index >= last;

    [
        (PageControl::First, 0, at_start),
        (PageControl::Previous, index.saturating_sub(1), at_start),
        (PageControl::Next, (index + 1).min(last), at_end),
        (PageControl::Last, last, at_end),
    ]
}

fn control_label(control: PageControl) -> &'static str {
    match control {
        PageControl::First => "<<",
        PageControl::Previous => "<",
        PageControl::Next => ">",
        PageControl::Last => ">>",
    }
}

fn ephemeral(content: String) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true)
}

fn success_embed(context: &OutcomeContext) -> CreateEmbed {
    CreateEmbed::new()
        .title("Success")
        .color(GREEN)
        .author(CreateEmbedAuthor::new(&context.target.name))
        .footer(id_footer(context))
        .timestamp(Timestamp::now())
}

fn id_footer(context: &OutcomeContext) -> CreateEmbedFooter {
    CreateEmbedFooter::new(format!("{} ID: {}", context.kind.label(), context.target.id))
}

fn scope_word(context: &OutcomeContext) -> &'static str {
    if context.command_name.is_some() {
        "command"
    } else {
        "guild"
    }
}
