//! Error types for the crate's own fallible operations.
//!
//! Operations handed to [`retry_with_backoff`](crate::retry::retry_with_backoff)
//! keep their own error type; [`StarterError`] only covers what this crate
//! itself can get wrong (configuration, JSON records, logging setup).

mod boundary;

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StarterError {
    /// A configuration value could not be read or is out of range.
    #[error("invalid configuration for {key}: {message}")]
    Config {
        /// The variable or field that was rejected
        key: String,
        /// What was wrong with it
        message: String,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(String),

    /// A serialized outcome record had inconsistent fields.
    #[error("invalid outcome record: {0}")]
    InvalidOutcome(String),

    /// A failed [`Outcome`](crate::outcome::Outcome) was turned into an error.
    #[error("operation failed: {0}")]
    Operation(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

impl StarterError {
    /// Build a [`StarterError::Config`] for `key`.
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result alias for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, StarterError>;

crate::error_boundary!(serde_json::Error => StarterError, |e| {
    StarterError::Json(e.to_string())
});
