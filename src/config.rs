use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::parse_u64_from_string,
};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Guild commands are registered to during development.
    pub dev_guild_id: Option<u64>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            dev_guild_id: std::env::var("DEV_GUILD_ID")
                .ok()
                .filter(|value| !value.is_empty())
                .map(parse_u64_from_string)
                .transpose()?,
            log_level: match std::env::var("LOG_LEVEL") {
                Ok(value) => Level::from_str(&value).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value,
                })?,
                Err(_) => Level::INFO,
            },
        })
    }
}
