//! Catalog Configuration
//!
//! Embedded JSON settings; every field has a default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::id::IdStrategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Console log level: error, warn, info, debug, trace or off
    pub log_level: String,
    pub id_strategy: IdStrategy,
    /// Heading shown above the item grid
    pub title: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            id_strategy: IdStrategy::default(),
            title: "Food Items".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CatalogConfig::from_json("{}").expect("empty object");
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{"log_level": "debug", "id_strategy": "monotonic", "title": "Menu"}"#;
        let config = CatalogConfig::from_json(json).expect("valid config");
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.title, "Menu");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = CatalogConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CatalogConfig::from_json(r#"{"id_strategy": "random"}"#),
            Err(CatalogError::Config(_))
        ));
    }
}
