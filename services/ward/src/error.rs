//! Error types for the ward client

use ward_types::ValidationError;

/// Errors that can occur while talking to the ward backend
#[derive(Debug, thiserror::Error)]
pub enum WardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The room view ended in its error state; carries the rendered error
    #[error("{0}")]
    RoomUnavailable(String),

    #[error("Invalid request URL: {0}")]
    Url(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WardError {
    /// HTTP status of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            WardError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for ward operations
pub type Result<T> = std::result::Result<T, WardError>;
