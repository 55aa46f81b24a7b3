//! Client error types.

/// Errors that can occur when using the Linkzo client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the submission as incomplete.
    #[error("validation failed: {message}")]
    Validation {
        /// Message from the server.
        message: String,
    },

    /// The admin key was missing or wrong.
    #[error("unauthorized")]
    Unauthorized,

    /// Server returned any other failure.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the server.
        message: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
