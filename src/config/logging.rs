//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,leadership_assessment=debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.level"));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,leadership_assessment=debug".to_string()
}
