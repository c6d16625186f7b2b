//! User context menu commands adding or removing an account from a list.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandType, Context, CreateCommand, Permissions};

use crate::{
    bot::command::modify_target,
    error::{access::AccessError, AppError},
    model::access_list::{AccessAction, AccessListKind},
};

const MENUS: [(AccessAction, AccessListKind); 4] = [
    (AccessAction::Add, AccessListKind::Allow),
    (AccessAction::Add, AccessListKind::Deny),
    (AccessAction::Remove, AccessListKind::Allow),
    (AccessAction::Remove, AccessListKind::Deny),
];

fn menu_name(action: AccessAction, list: AccessListKind) -> String {
    match action {
        AccessAction::Add => format!("Add to {}", list),
        AccessAction::Remove => format!("Remove from {}", list),
    }
}

/// Resolves a context menu command name to its action and list.
fn parse_menu(name: &str) -> Option<(AccessAction, AccessListKind)> {
    MENUS
        .into_iter()
        .find(|(action, list)| menu_name(*action, *list) == name)
}

pub fn definitions() -> Vec<CreateCommand> {
    MENUS
        .into_iter()
        .map(|(action, list)| {
            CreateCommand::new(menu_name(action, list))
                .kind(CommandType::User)
                .default_member_permissions(Permissions::MANAGE_GUILD)
        })
        .collect()
}

/// Handles a user context menu command. Context menu selections are always guild-wide.
pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (action, list) = parse_menu(&command.data.name)
        .ok_or_else(|| AccessError::UnknownCommand(command.data.name.clone()))?;
    let target_id = command
        .data
        .target_id
        .ok_or_else(|| AccessError::MissingOption("target".to_string()))?
        .get();

    modify_target(db, ctx, command, list, action, target_id, None).await
}
