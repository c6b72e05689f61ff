//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (filesystem, in-memory)

pub mod catalog;

pub use catalog::{FsCatalogSource, InMemoryCatalogSource};
