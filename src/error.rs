//! Error types for the Telegram plugin

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while executing the plugin
#[derive(Debug, Error)]
pub enum Error {
    /// Plugin used before `initialize` was called
    #[error("plugin is not initialized")]
    NotInitialized,

    /// Configuration error (e.g. blank bot token)
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid request input
    #[error("validation error: {0}")]
    Validation(String),

    /// Operation name not recognized
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Non-success response from the Telegram Bot API
    #[error("telegram api error: {status} - {body}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body, surfaced verbatim
        body: String,
    },

    /// Execution aborted by the caller's cancellation token
    #[error("operation cancelled")]
    Cancelled,

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request binding / serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
