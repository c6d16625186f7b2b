//! Interaction event handler.
//!
//! Routes command and component interactions to their handlers. Any error is logged
//! and answered with a generic failure message, never with a partial success.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateInteractionResponse, Interaction};

use crate::{
    bot::{command, component},
    service::access_list::render,
};

/// Handles an interaction.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context for responding
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    let failure = CreateInteractionResponse::Message(render::failure_message());

    match interaction {
        Interaction::Command(command) => {
            if let Err(e) = command::handle(db, &ctx, &command).await {
                tracing::error!(
                    "Failed to handle command {} in guild {:?}: {:?}",
                    command.data.name,
                    command.guild_id,
                    e
                );

                if let Err(e) = command.create_response(&ctx.http, failure).await {
                    tracing::error!("Failed to send failure response: {:?}", e);
                }
            }
        }
        Interaction::Component(component) => {
            if let Err(e) = component::handle(db, &ctx, &component).await {
                tracing::error!(
                    "Failed to handle component {} in guild {:?}: {:?}",
                    component.data.custom_id,
                    component.guild_id,
                    e
                );

                if let Err(e) = component.create_response(&ctx.http, failure).await {
                    tracing::error!("Failed to send failure response: {:?}", e);
                }
            }
        }
        _ => {}
    }
}
