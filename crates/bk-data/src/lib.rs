//! Catalog loading and configuration for the catalog browser

pub mod catalog;
pub mod config;
pub mod sample;

use thiserror::Error;

use bk_core::CatalogError;

// Re-exports
pub use catalog::{load_catalog, parse_catalog, CatalogFile};
pub use config::AppConfig;
pub use sample::sample_catalog;

/// Errors that can occur while loading data or configuration
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
