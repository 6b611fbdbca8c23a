//! Error types for the `wordfill` core library.

use thiserror::Error;

/// Result type alias using the `wordfill` Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for `wordfill` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the suggestion API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Suggestion API answered with a non-success status
    #[error("Suggestion API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
