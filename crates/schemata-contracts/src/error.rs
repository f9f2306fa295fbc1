//! Caller-contract error types for the schemata validator.
//!
//! Validation findings are never errors: they are recorded as data in a
//! `ValidationResult`. `SchemataError` covers only the cases that abort a
//! call outright, such as a missing argument or an unreadable settings file.

use thiserror::Error;

/// The unified error type for the schemata crates.
#[derive(Debug, Error)]
pub enum SchemataError {
    /// A required argument was absent at the API boundary.
    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },

    /// Validator settings are missing, malformed, or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A schema or instance document could not be read or parsed.
    #[error("document error: {reason}")]
    DocumentError { reason: String },
}

impl SchemataError {
    /// Shorthand for a `MissingArgument` error naming `name`.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }
}

/// Convenience alias used throughout the schemata crates.
pub type SchemataResult<T> = Result<T, SchemataError>;
