use thiserror::Error;

/// Failures decoding a component custom id back into its payload.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// The custom id does not start with a known payload prefix.
    #[error("Unknown component payload '{0}'")]
    UnknownPrefix(String),

    /// A required `key=value` pair is absent.
    #[error("Component payload '{payload}' is missing key '{key}'")]
    MissingKey { key: &'static str, payload: String },

    /// A value could not be parsed into its expected type.
    #[error("Invalid value '{value}' for key '{key}' in component payload")]
    InvalidValue { key: &'static str, value: String },
}
