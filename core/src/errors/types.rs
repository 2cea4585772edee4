//! Domain-specific error types for remote access and user input
//!
//! This module provides error type definitions for the marketplace
//! operations. Display strings are short and stable; the client shell maps
//! the machine-readable codes from `ErrorResponse` to user-facing copy.

use rn_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Errors raised by remote calls (document store, rate endpoint)
///
/// Transport and payload failures are collapsed into this one surface so
/// callers can degrade to an empty view with a single message.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to decode {resource}")]
    DecodeFailed { resource: String },

    #[error("Service unavailable")]
    ServiceUnavailable,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid price: {value}")]
    InvalidPrice { value: String },

    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid rating: {rating}")]
    InvalidRating { rating: u8 },

    #[error("Invalid search radius: {radius}")]
    InvalidRadius { radius: f64 },
}

/// Authentication and ownership errors
///
/// Sign-in itself is handled by the hosted identity provider; these cover
/// the cases where an operation needs an authenticated or authorized user
/// and none is present.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No authenticated user")]
    NotAuthenticated,

    #[error("User is not verified")]
    NotVerified,

    #[error("User does not own this resource")]
    NotOwner,
}

/// Convert NetworkError to ErrorResponse
impl From<NetworkError> for ErrorResponse {
    fn from(err: NetworkError) -> Self {
        let error_code = match &err {
            NetworkError::RequestFailed { .. } => "REQUEST_FAILED",
            NetworkError::Timeout => "TIMEOUT",
            NetworkError::DecodeFailed { .. } => "DECODE_FAILED",
            NetworkError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
            ValidationError::InvalidPrice { .. } => "INVALID_PRICE",
            ValidationError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            ValidationError::InvalidRating { .. } => "INVALID_RATING",
            ValidationError::InvalidRadius { .. } => "INVALID_RADIUS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::NotAuthenticated => "NOT_AUTHENTICATED",
            AuthError::NotVerified => "NOT_VERIFIED",
            AuthError::NotOwner => "NOT_OWNER",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_messages() {
        let error = NetworkError::RequestFailed {
            message: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let error = ValidationError::InvalidPrice {
            value: "abc".to_string(),
        };
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "INVALID_PRICE");
        assert!(response.message.contains("abc"));
    }

    #[test]
    fn test_auth_error_conversion() {
        let error = AuthError::NotAuthenticated;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "NOT_AUTHENTICATED");
    }
}
