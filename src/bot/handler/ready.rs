//! Ready event handler for bot initialization.
//!
//! Registers the application commands once the gateway handshake completes. With a
//! development guild configured the commands are registered to that guild only, which
//! takes effect immediately; otherwise they are registered globally.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
/// - `dev_guild_id` - Guild to register commands to instead of globally
pub async fn handle_ready(ctx: Context, ready: Ready, dev_guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = command::definitions();

    let result = match dev_guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, commands)
                .await
        }
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match result {
        Ok(registered) => tracing::info!(
            "Registered {} commands {}",
            registered.len(),
            dev_guild_id
                .map(|id| format!("to guild {}", id))
                .unwrap_or_else(|| "globally".to_string())
        ),
        Err(e) => tracing::error!("Failed to register commands: {:?}", e),
    }
}
