//! In-memory catalog source for tests and embedding

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, CatalogSource, LoadedCatalog};

use super::checksum;

/// Serves a fixed catalog
///
/// The fingerprint is computed once, from the catalog's JSON encoding.
pub struct InMemoryCatalogSource {
    catalog: Catalog,
    fingerprint: String,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let encoded = serde_json::to_vec(&catalog).map_err(|e| CatalogError::Parse {
            source_name: "in-memory".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            fingerprint: checksum([encoded.as_slice()]),
            catalog,
        })
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> Result<LoadedCatalog, CatalogError> {
        Ok(LoadedCatalog {
            catalog: self.catalog.clone(),
            fingerprint: self.fingerprint.clone(),
        })
    }

    async fn fingerprint(&self) -> Result<String, CatalogError> {
        Ok(self.fingerprint.clone())
    }
}
