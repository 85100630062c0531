//! Content loaders for reading game data from files.
//!
//! Loaders convert RON catalogs (and the TOML config) into the engine types.
//! Each loader can read an external file or fall back to the built-in data
//! shipped with this crate via [`include_str!`]. A malformed catalog is a
//! startup-fatal configuration bug; loaders surface it as an error and the
//! session refuses to start.

pub mod config;
pub mod items;
pub mod registry;
pub mod words;

pub use config::ConfigLoader;
pub use items::ItemLoader;
pub use registry::RegistryLoader;
pub use words::WordLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
