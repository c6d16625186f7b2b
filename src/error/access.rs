use thiserror::Error;

/// Access list requests the bot cannot act on.
///
/// These are caller contract violations rather than user-facing outcomes: a duplicate
/// add or a missing remove is reported to the user as a normal result, not through
/// this type.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The target ID is not a member, role or channel of the guild.
    #[error("Target {0} is not a member, role or channel of the guild")]
    UnresolvableTarget(u64),

    /// The interaction was not sent from within a guild, or the guild is not cached.
    #[error("Interaction has no guild context")]
    MissingGuild,

    /// A required command option was not provided.
    #[error("Missing required option '{0}'")]
    MissingOption(String),

    /// A list entry was scoped to a name Discord would not accept as a command name.
    #[error("Invalid command name '{0}'")]
    InvalidCommandName(String),

    /// The interaction named a command or subcommand the bot does not register.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}
