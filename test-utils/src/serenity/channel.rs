//! Test fixture for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test guild text channel.
///
/// # Arguments
/// - `guild_id` - Guild the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(guild_id: u64, channel_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 0,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "parent_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
