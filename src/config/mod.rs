//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEADERSHIP_ASSESSMENT` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use leadership_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Questions from {}", config.catalog.questions_path.display());
//! ```

mod catalog;
mod error;
mod logging;
mod scoring;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::domain::scoring::ScoringThresholds;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Consistency and cross-validation thresholds
    #[serde(default)]
    pub scoring: ScoringThresholds,

    /// Question and dilemma catalog files
    pub catalog: CatalogConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEADERSHIP_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LEADERSHIP_ASSESSMENT__CATALOG__QUESTIONS_PATH=data/questions.json`
    /// - `LEADERSHIP_ASSESSMENT__SCORING__CROSS_VALIDATION_GAP=1.5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEADERSHIP_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var(
            "LEADERSHIP_ASSESSMENT__CATALOG__QUESTIONS_PATH",
            "data/questions.json",
        );
        env::set_var(
            "LEADERSHIP_ASSESSMENT__CATALOG__DILEMMAS_PATH",
            "data/dilemmas.yaml",
        );
    }

    fn clear_env() {
        env::remove_var("LEADERSHIP_ASSESSMENT__CATALOG__QUESTIONS_PATH");
        env::remove_var("LEADERSHIP_ASSESSMENT__CATALOG__DILEMMAS_PATH");
        env::remove_var("LEADERSHIP_ASSESSMENT__SCORING__CROSS_VALIDATION_GAP");
        env::remove_var("LEADERSHIP_ASSESSMENT__LOGGING__JSON");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.catalog.questions_path.to_str(),
            Some("data/questions.json")
        );
        assert_eq!(config.scoring, ScoringThresholds::default());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_threshold_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LEADERSHIP_ASSESSMENT__SCORING__CROSS_VALIDATION_GAP", "1.5");
        env::set_var("LEADERSHIP_ASSESSMENT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.cross_validation_gap, 1.5);
        assert_eq!(config.scoring.contradiction_pair_gap, 2.0);
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_catalog_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
