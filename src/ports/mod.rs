//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Loads the question and dilemma catalog

mod catalog_source;

pub use catalog_source::{CatalogError, CatalogSource, LoadedCatalog};
