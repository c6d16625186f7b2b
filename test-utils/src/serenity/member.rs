//! Test fixture for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test guild Member holding the given roles.
///
/// The user's discriminator is `"0"` (a migrated username), so `User::tag()` yields the
/// bare username.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `role_ids` - IDs of the roles the member holds
/// - `bot` - Whether the account is a bot
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    name: &str,
    role_ids: &[u64],
    bot: bool,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": name,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": bot,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
