//! Catalog location configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the question and dilemma catalogs are read from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Questions file (`.json`, `.yaml` or `.yml`)
    pub questions_path: PathBuf,

    /// Dilemmas file (`.json`, `.yaml` or `.yml`)
    pub dilemmas_path: PathBuf,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_path(&self.questions_path, "catalog.questions_path")?;
        check_path(&self.dilemmas_path, "catalog.dilemmas_path")?;
        Ok(())
    }
}

fn check_path(path: &Path, name: &'static str) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::MissingRequired(name));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("json" | "yaml" | "yml") => Ok(()),
        _ => Err(ValidationError::UnsupportedCatalogFormat(
            path.display().to_string(),
        )),
    }
}
