// ABOUTME: Unified error handling with error codes and serializable error responses
// ABOUTME: Domain errors from session gating, pricing, and data services convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Blockbustre

//! # Unified Error Handling System
//!
//! Every failure the core can report maps onto one [`ErrorCode`]. Domain
//! modules keep their own `thiserror` enums and convert into [`AppError`]
//! at the boundary, so a rendering collaborator only ever inspects one type.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the core
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Session & access (1000-1999)
    /// No session, or the persisted session could not be read
    #[serde(rename = "UNAUTHENTICATED")]
    Unauthenticated = 1000,
    /// Signed in, but the role does not grant access
    #[serde(rename = "INSUFFICIENT_ROLE")]
    InsufficientRole = 1001,

    // Validation (3000-3999)
    /// Gas fee was negative, NaN, infinite, or too large to price
    #[serde(rename = "INVALID_AMOUNT")]
    InvalidAmount = 3000,
    /// Generic input validation failure
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3001,

    // Resources (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External services (5000-5999)
    /// Data service collaborator failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9000,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "You need to sign in to view this page",
            Self::InsufficientRole => "Your account does not have access to this page",
            Self::InvalidAmount => "The fee amount is invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether the caller should answer with a redirect instead of a message.
    ///
    /// Access failures are silent redirects; amount failures must block
    /// payment confirmation with a visible validation message.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::InsufficientRole)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the core
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional key-value context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No valid session
    #[must_use]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthenticated, message)
    }

    /// Session is valid but the role is not privileged enough
    #[must_use]
    pub fn insufficient_role(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientRole, message)
    }

    /// Fee input rejected
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAmount, message)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope handed to rendering collaborators
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Extra context, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_codes_are_redirects() {
        assert!(ErrorCode::Unauthenticated.is_redirect());
        assert!(ErrorCode::InsufficientRole.is_redirect());
        assert!(!ErrorCode::InvalidAmount.is_redirect());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_amount("gas fee must not be negative")
            .with_details(serde_json::json!({ "gas_fee": "-5" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_AMOUNT"));
        assert!(json.contains("gas_fee"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::unauthenticated("no session"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::not_found("Contract 42");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Contract 42 not found"
        );
    }
}
