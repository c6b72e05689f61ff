//! Catalog adapters for filesystem and in-memory sources

mod filesystem;
mod in_memory;

pub use filesystem::FsCatalogSource;
pub use in_memory::InMemoryCatalogSource;

use sha2::{Digest, Sha256};

/// Hex SHA-256 over the given parts, each followed by a NUL separator.
fn checksum<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
        hasher.update([0u8]);
    }
    format!("{:x}", hasher.finalize())
}
