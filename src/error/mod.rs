//! Error types for the gatekeeper bot.
//!
//! `AppError` is the top-level error returned by services and interaction handlers. It
//! wraps the domain-specific error enums of this module alongside database and Discord
//! errors. Repositories return `sea_orm::DbErr` directly, which converts into
//! `AppError::DbErr` through `?`.
//!
//! Any `AppError` reaching the interaction handler is logged and answered with a generic
//! failure message, never with a partial success.

pub mod access;
pub mod config;
pub mod internal;
pub mod payload;

use thiserror::Error;

use crate::error::{
    access::AccessError, config::ConfigError, internal::InternalError, payload::PayloadError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so services can propagate
/// repository and Discord failures with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Access list request that cannot be carried out (unresolvable target, missing
    /// guild context, unknown command).
    #[error(transparent)]
    AccessErr(#[from] AccessError),

    /// Malformed component custom id.
    #[error(transparent)]
    PayloadErr(#[from] PayloadError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal issue indicating unexpected behavior, such as a stored ID that fails
    /// to parse.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
