// --- File: crates/huddle_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Huddle errors.
///
/// Integration crates keep their own error enums and convert into this one at
/// the handler boundary, choosing the client-facing message there.
#[derive(Error, Debug)]
pub enum HuddleError {
    /// Request body could not be parsed
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing or malformed credentials on the request
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An upstream provider call failed
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The integration is switched off in the runtime configuration
    #[error("Service disabled: {0}")]
    ServiceDisabled(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl HuddleError {
    /// The message shown to API clients, without the variant prefix.
    pub fn client_message(&self) -> &str {
        match self {
            HuddleError::ParseError(msg)
            | HuddleError::ConfigError(msg)
            | HuddleError::AuthError(msg)
            | HuddleError::ValidationError(msg)
            | HuddleError::NotFoundError(msg)
            | HuddleError::ServiceDisabled(msg)
            | HuddleError::InternalError(msg) => msg,
            HuddleError::ExternalServiceError { message, .. } => message,
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HuddleError {
    fn status_code(&self) -> u16 {
        match self {
            HuddleError::ParseError(_) => 400,
            HuddleError::ConfigError(_) => 500,
            HuddleError::AuthError(_) => 401,
            HuddleError::ValidationError(_) => 400,
            // Upstream failures are reported to callers as plain 500s.
            HuddleError::ExternalServiceError { .. } => 500,
            HuddleError::NotFoundError(_) => 404,
            HuddleError::ServiceDisabled(_) => 503,
            HuddleError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, HuddleError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, HuddleError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| HuddleError::InternalError(format!("{}: {}", context, error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> HuddleError {
    HuddleError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> HuddleError {
    HuddleError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> HuddleError {
    HuddleError::AuthError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> HuddleError {
    HuddleError::NotFoundError(message.to_string())
}

pub fn service_disabled<T: fmt::Display>(message: T) -> HuddleError {
    HuddleError::ServiceDisabled(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> HuddleError {
    HuddleError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

/// Fails with a validation error naming `field` when `value` is empty.
///
/// Values are otherwise opaque: whitespace-only input is accepted as-is.
pub fn require_field(field: &str, value: &str) -> Result<(), HuddleError> {
    if value.is_empty() {
        return Err(validation_error(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(not_found("Token not found for user").status_code(), 404);
        assert_eq!(validation_error("userId is required").status_code(), 400);
        assert_eq!(auth_error("No authorization header").status_code(), 401);
        assert_eq!(external_service_error("slack", "boom").status_code(), 500);
        assert_eq!(service_disabled("Slack").status_code(), 503);
    }

    #[test]
    fn test_client_message_strips_variant_prefix() {
        let err = not_found("Token not found for user");
        assert_eq!(err.client_message(), "Token not found for user");
        assert_eq!(err.to_string(), "Not found: Token not found for user");

        let err = external_service_error("zoom", "Failed to create Zoom meeting");
        assert_eq!(err.client_message(), "Failed to create Zoom meeting");
    }

    #[test]
    fn test_require_field() {
        assert!(require_field("userId", "alice").is_ok());
        let err = require_field("userId", "").unwrap_err();
        assert_eq!(err.client_message(), "userId is required");
        assert!(require_field("token", "   ").is_ok());
    }

    #[test]
    fn test_context_maps_to_internal_error() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let err = result.context("writing log").unwrap_err();
        assert!(matches!(err, HuddleError::InternalError(ref m) if m == "writing log: disk"));
    }
}
