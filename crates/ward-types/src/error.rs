//! Validation errors raised before any request leaves the client

/// Errors produced when a value fails local validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid availability status. Must be \"Available\" or \"Under maintenance\"")]
    InvalidAvailability(String),

    #[error("Update must change at least one field")]
    EmptyUpdate,
}

/// Result type alias for validation
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
