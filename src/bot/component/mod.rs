//! Button interactions posted by the list commands.
//!
//! Buttons carry everything they need in their custom id, so a click is handled from
//! the decoded payload and freshly read state alone.

pub mod move_target;
pub mod pagination;

use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteraction, Context, CreateInteractionResponse};

use crate::{
    error::AppError,
    model::payload::ComponentPayload,
    service::access_list::render,
};

/// Dispatches a button click by its decoded custom id.
///
/// # Returns
/// - `Ok(())` - The interaction was answered
/// - `Err(AppError::PayloadErr)` - The custom id is not one this bot issues
/// - `Err(AppError)` - The action failed before a response was sent
pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    match ComponentPayload::decode(&component.data.custom_id)? {
        ComponentPayload::Move(payload) => move_target::handle(db, ctx, component, payload).await,
        ComponentPayload::MoveCancel => {
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::UpdateMessage(render::cancelled_message()),
                )
                .await?;

            Ok(())
        }
        ComponentPayload::Page(payload) => pagination::handle(db, ctx, component, payload).await,
    }
}
