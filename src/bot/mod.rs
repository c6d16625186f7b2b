//! Discord gateway client and interaction handling.
//!
//! The bot registers the `/allowlist` and `/denylist` slash commands plus four user
//! context menu commands, and answers their interactions and the buttons they post.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Cache guilds with their roles and channels for target classification
//! - `GUILD_MEMBERS` - Cache members for target classification and hierarchy checks
//!   (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod guild;
pub mod handler;
pub mod start;
