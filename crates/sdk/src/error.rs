//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-2xx response, decoded from the server's error envelope
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 401 split out so callers can drop a stale session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A protected call was made with no token set
    #[error("No authentication token found")]
    MissingToken,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            SdkError::InvalidUrl(e.to_string())
        } else {
            SdkError::Connection(e.to_string())
        }
    }
}
