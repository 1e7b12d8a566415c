//! Domain error types for rites
//!
//! Provides structured error types for different domains:
//! - `CatalogError` for the religion catalog invariants
//! - `ConfigError` for loading the configuration file
//! - `RitesError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for rites
#[derive(Debug, Error)]
pub enum RitesError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Violations of the catalog invariants, detected when the catalog is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Featured religion '{0}' has no record in the catalog")]
    UnknownFeatured(String),

    #[error("Featured religion '{0}' is listed more than once")]
    DuplicateFeatured(String),

    #[error("Featured religion '{0}' has no symbol")]
    MissingSymbol(String),

    #[error("Religion id '{0}' is defined more than once")]
    DuplicateReligion(String),

    #[error("Religion id must not be empty")]
    EmptyId,
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid advance delay '{0}': expected milliseconds")]
    InvalidDelay(String),
}

/// Result type alias for RitesError
pub type Result<T> = std::result::Result<T, RitesError>;

/// Result type alias for CatalogError
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for RitesError {
    fn from(msg: String) -> Self {
        RitesError::Other(msg)
    }
}

impl From<&str> for RitesError {
    fn from(msg: &str) -> Self {
        RitesError::Other(msg.to_string())
    }
}
