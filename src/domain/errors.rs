//! Domain error types
//!
//! This module defines the error hierarchy for the export runner. A failed
//! export invocation is not an error at this level: it is an
//! [`InvocationOutcome`](crate::core::outcome::InvocationOutcome) that the
//! driver records and moves past. `RunnerError` covers everything that stops
//! the runner before the loop starts (configuration, I/O, serialization).

use thiserror::Error;

/// Main runner error type
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RunnerError {
    fn from(err: std::io::Error) -> Self {
        RunnerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RunnerError {
    fn from(err: serde_json::Error) -> Self {
        RunnerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RunnerError {
    fn from(err: toml::de::Error) -> Self {
        RunnerError::Configuration(format!("TOML parse error: {err}"))
    }
}
