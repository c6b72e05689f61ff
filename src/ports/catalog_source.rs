//! CatalogSource port for loading question and dilemma catalogs

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// Catalog file exists but could not be read
    #[error("IO error: {0}")]
    IoError(String),

    /// Catalog content is not a valid question or dilemma list
    #[error("Invalid catalog {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// File extension is neither JSON nor YAML
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::NotFound(_) => ErrorCode::CatalogNotFound,
            CatalogError::IoError(_) => ErrorCode::CatalogUnreadable,
            CatalogError::Parse { .. } | CatalogError::UnsupportedFormat(_) => {
                ErrorCode::InvalidCatalog
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// A catalog together with the fingerprint of the content it was parsed from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// SHA-256 hex digest of the same content `catalog` was built from
    pub fingerprint: String,
}

/// Source of the question and dilemma catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full, unfiltered catalog and its fingerprint in one read
    async fn load(&self) -> Result<LoadedCatalog, CatalogError>;

    /// SHA-256 hex digest identifying the catalog content
    ///
    /// Two loads with the same fingerprint yield the same catalog.
    async fn fingerprint(&self) -> Result<String, CatalogError> {
        Ok(self.load().await?.fingerprint)
    }
}
