use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot and blocks until the client shuts down.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and development guild
/// - `db` - Database connection used by the interaction handlers
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Client creation or the gateway connection failed
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.dev_guild_id);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
