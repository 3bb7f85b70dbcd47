//! Application configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use bk_core::{Catalog, PageSize, ThemeMode};

use crate::{catalog, sample, DataError};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "CATALOG_CONFIG";

/// Browser configuration, every field optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Records per page
    pub page_size: usize,

    /// Catalog JSON file; the built-in sample catalog when absent
    pub catalog_path: Option<PathBuf>,

    /// Initial colour theme
    pub theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            catalog_path: None,
            theme: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// Read a configuration file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&text)?;

        // Relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve the configuration from an explicit path, then the environment
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self, DataError> {
        let path = explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> Result<(), DataError> {
        self.page_size()?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<PageSize, DataError> {
        PageSize::new(self.page_size)
            .ok_or_else(|| DataError::Config("page_size must be at least 1".to_string()))
    }

    /// Load the configured catalog, or the sample catalog
    pub fn load_catalog(&self) -> Result<Catalog, DataError> {
        match &self.catalog_path {
            Some(path) => catalog::load_catalog(path),
            None => {
                info!("No catalog configured, using the sample catalog");
                sample::sample_catalog()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size().unwrap().get(), 36);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "config.json", r#"{ "theme": "night" }"#);
        let config = AppConfig::load(path).unwrap();
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.page_size, PageSize::DEFAULT);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "config.json", r#"{ "page_size": 0 }"#);
        assert!(matches!(AppConfig::load(path), Err(DataError::Config(_))));
    }

    #[test]
    fn test_relative_catalog_path_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "books.json",
            r#"{ "books": [], "authors": {}, "genres": {} }"#,
        );
        let path = write(
            dir.path(),
            "config.json",
            r#"{ "catalog_path": "books.json", "page_size": 5 }"#,
        );

        let config = AppConfig::load(path).unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some(dir.path().join("books.json").as_path()));
        assert!(config.load_catalog().unwrap().is_empty());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "config.json", r#"{ "page_size": 7 }"#);
        let config = AppConfig::discover(Some(path)).unwrap();
        assert_eq!(config.page_size, 7);
    }
}
