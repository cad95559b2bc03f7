//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rating
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RatingConfig;

/// File name of the rating configuration inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "rating.yaml";

/// Loads and provides access to the rating configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── rating.yaml   # Sheet names, order column headers, sentinel year
/// ```
///
/// # Example
///
/// ```no_run
/// use shipment_rating::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Base rate sheet: {}", loader.config().sheets.base_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RatingConfig,
}

impl ConfigLoader {
    /// Loads configuration from `rating.yaml` in the specified directory.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`RatingConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml(&config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RatingConfig) -> Self {
        Self { config }
    }

    fn load_yaml(path: &Path) -> EngineResult<RatingConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rating configuration.
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().sheets.orders, "订单明细");
        assert_eq!(loader.config().sheets.base_rate, "报价单");
        assert_eq!(loader.config().columns.postal_code, "邮编");
        assert_eq!(loader.config().disallowed_order_year, Some(2025));
        assert_eq!(loader.config().result_sheet, "results");
    }

    #[test]
    fn test_loaded_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &RatingConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rating.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("rating-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE_NAME), "disallowed_order_year: [not, a, year]\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
