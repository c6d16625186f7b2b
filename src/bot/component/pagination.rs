use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteraction, Context, CreateInteractionResponse};

use crate::{
    bot::guild::GuildContext,
    error::{access::AccessError, AppError},
    model::{payload::PagePayload, view::ViewParam},
    service::access_list::{render, view::AccessListViewService},
};

/// Re-renders a listing at the page a navigation button points to.
///
/// The listing is rebuilt from current state, so the page count may have changed
/// since the message was posted; the index is clamped to the last page.
pub async fn handle(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    payload: PagePayload,
) -> Result<(), AppError> {
    let guild_id = component.guild_id.ok_or(AccessError::MissingGuild)?;
    let guild = GuildContext::load(ctx, guild_id).await?;

    let page = AccessListViewService::new(db)
        .page(ViewParam {
            guild: guild.snapshot.record_param(),
            list: payload.list,
            filter: payload.filter,
            command_name: payload.command_name,
            page: payload.page,
        })
        .await?;

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(render::page_message(page.as_ref())),
        )
        .await?;

    Ok(())
}
