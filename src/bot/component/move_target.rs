use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteraction, Context, CreateInteractionResponse};

use crate::{
    bot::guild::GuildContext,
    error::{access::AccessError, AppError},
    model::{access_list::ConfirmMoveParam, payload::MovePayload},
    service::access_list::{render, transfer::MoveService},
};

/// Executes a confirmed move and replaces the prompt with its result.
pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    payload: MovePayload,
) -> Result<(), AppError> {
    let guild_id = component.guild_id.ok_or(AccessError::MissingGuild)?;
    let guild = GuildContext::load(ctx, guild_id).await?;

    let target_name = guild
        .snapshot
        .name(payload.kind, payload.target_id)
        .map(str::to_string);

    let outcome = MoveService::new(db)
        .confirm(ConfirmMoveParam {
            guild: guild.snapshot.record_param(),
            payload,
            target_name,
        })
        .await?;

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(render::move_message(&outcome)),
        )
        .await?;

    Ok(())
}
