//! Error types for mindtrace.

use thiserror::Error;

/// Result type alias using mindtrace's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mindtrace operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Request-boundary validation failed (empty batch, too few records).
    /// Surfaced to the caller with a descriptive message, never recovered.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Analytical pipeline failure (e.g. empty group, malformed timestamp).
    /// Recovered at the request boundary by the canonical fallback response.
    #[error("Processing error: {0}")]
    Processing(String),

    /// External text-generation call failed or returned unusable output.
    /// Recovered locally by the deterministic fallback, never propagated.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
