//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Catalog errors
    CatalogNotFound,
    CatalogUnreadable,
    InvalidCatalog,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::CatalogNotFound => "CATALOG_NOT_FOUND",
            ErrorCode::CatalogUnreadable => "CATALOG_UNREADABLE",
            ErrorCode::InvalidCatalog => "INVALID_CATALOG",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}
