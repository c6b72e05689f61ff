//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Threshold must be positive: {0}")]
    NonPositiveThreshold(&'static str),

    #[error("Percentage must be at most 100: {0}")]
    PercentageOutOfRange(&'static str),

    #[error("Thresholds out of order: {0}")]
    ThresholdOrder(&'static str),

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedCatalogFormat(String),
}
