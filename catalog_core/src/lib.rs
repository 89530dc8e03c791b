mod catalog;
mod config;

pub use catalog::Catalog;

use gear_core::GearId;
use std::path::PathBuf;
use thiserror::Error;

/// Error loading catalog configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error resolving an identifier against the catalog
///
/// A build holding an identifier that no longer resolves is corrupt state
/// (stale reference to a removed or renamed item), not a normal empty slot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown item: {0}")]
    UnknownItem(GearId),
    #[error("Item {0} is not a food item")]
    NotFood(GearId),
}
