//! Error types for StatQuery services
//!
//! Provides a comprehensive error handling system with:
//! - Distinct error types for different failure modes
//! - Stable machine-readable error codes
//! - Conversions from library error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (1xxx)
    ValidationError,
    MissingField,
    InvalidFormat,
    ClassifierMismatch,

    // Internal errors (9xxx)
    InternalError,
    ConfigurationError,
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric code for this error
    pub fn as_code(&self) -> u16 {
        match self {
            // Validation (1xxx)
            ErrorCode::ValidationError => 1001,
            ErrorCode::MissingField => 1002,
            ErrorCode::InvalidFormat => 1003,
            ErrorCode::ClassifierMismatch => 1004,

            // Internal (9xxx)
            ErrorCode::InternalError => 9001,
            ErrorCode::ConfigurationError => 9002,
            ErrorCode::SerializationError => 9003,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Required field missing: {field}")]
    MissingField { field: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Classifier attribute mismatch: expected {expected}, found {found}")]
    ClassifierMismatch { expected: String, found: String },

    // Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::MissingField { .. } => ErrorCode::MissingField,
            AppError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            AppError::ClassifierMismatch { .. } => ErrorCode::ClassifierMismatch,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Configuration { .. } => ErrorCode::ConfigurationError,
            AppError::Serialization(_) => ErrorCode::SerializationError,
            AppError::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Check if this error was raised by construction-time validation
    pub fn is_validation(&self) -> bool {
        self.code().as_code() < 2000
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let err = AppError::ClassifierMismatch {
            expected: "ranking".into(),
            found: "comparison".into(),
        };
        assert_eq!(err.code(), ErrorCode::ClassifierMismatch);
        assert_eq!(err.code().as_code(), 1004);
    }

    #[test]
    fn test_validation_error() {
        let err = AppError::Validation {
            message: "sv score list length differs from dcid list".into(),
            field: Some("sv_scores".into()),
        };
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.is_validation());
    }

    #[test]
    fn test_internal_error_is_not_validation() {
        let err = AppError::Internal {
            message: "something went wrong".into(),
        };
        assert_eq!(err.code().as_code(), 9001);
        assert!(!err.is_validation());
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.code(), ErrorCode::SerializationError);
    }
}
