//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, NetworkError, ValidationError};

pub use rn_shared::types::response::ErrorResponse;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Network(e) => e.into(),
            DomainError::Auth(e) => e.into(),
            DomainError::ValidationErr(e) => e.into(),
            DomainError::Validation { ref message } => {
                ErrorResponse::new("VALIDATION_ERROR", message)
            }
            DomainError::BusinessRule { ref message } => {
                ErrorResponse::new("BUSINESS_RULE_VIOLATION", message)
            }
            DomainError::NotFound { ref resource } => {
                ErrorResponse::new("NOT_FOUND", format!("Resource not found: {}", resource))
            }
            DomainError::Internal { ref message } => ErrorResponse::new("INTERNAL_ERROR", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_bridges() {
        let err: DomainError = NetworkError::Timeout.into();
        assert_eq!(err.to_string(), "Request timed out");

        let err: DomainError = AuthError::NotOwner.into();
        assert!(err.to_string().contains("does not own"));
    }

    #[test]
    fn test_umbrella_response_codes() {
        let response: ErrorResponse = DomainError::NotFound {
            resource: "Listing".to_string(),
        }
        .into();
        assert_eq!(response.error, "NOT_FOUND");

        let response: ErrorResponse = DomainError::Network(NetworkError::Timeout).into();
        assert_eq!(response.error, "TIMEOUT");
    }
}
