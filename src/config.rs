//! Translator configuration.
//!
//! ```toml
//! # ORDER BY identifiers renamed after parsing
//! [sort_mappings]
//! identifier = "mapped1"
//! "qualified.identifier" = "mapped2"
//!
//! # Condition identifiers renamed while rendering
//! [condition_mappings]
//! name = "profile.name"
//!
//! # Substituted when a clause is absent
//! [defaults.where]
//! active = true
//!
//! [defaults.order_by]
//! created = -1
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Values handed back when a clause is absent from the input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Defaults {
    #[serde(default, rename = "where", alias = "where_clause")]
    pub where_clause: Option<serde_json::Value>,

    #[serde(default, rename = "order_by", alias = "orderBy")]
    pub order_by: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TranslatorConfig {
    /// `ORDER BY` identifier → replacement key
    #[serde(default)]
    pub sort_mappings: HashMap<String, String>,

    /// Condition identifier → replacement key
    #[serde(default)]
    pub condition_mappings: HashMap<String, String>,

    #[serde(default)]
    pub defaults: Defaults,
}

impl TranslatorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            sort_mappings = config.sort_mappings.len(),
            condition_mappings = config.condition_mappings.len(),
            "loaded translator config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_config() {
        let config = TranslatorConfig::from_toml_str(
            r#"
            [sort_mappings]
            identifier = "mapped1"
            "qualified.identifier" = "mapped2"

            [condition_mappings]
            name = "profile.name"

            [defaults.where]
            active = true

            [defaults.order_by]
            created = -1
            "#,
        )
        .unwrap();

        assert_eq!(config.sort_mappings["qualified.identifier"], "mapped2");
        assert_eq!(config.condition_mappings["name"], "profile.name");
        assert_eq!(config.defaults.where_clause, Some(json!({"active": true})));
        assert_eq!(config.defaults.order_by, Some(json!({"created": -1})));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = TranslatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let error = TranslatorConfig::from_toml_str("sort_mappings = 3").unwrap_err();
        assert!(matches!(error, ConfigError::Toml(_)));
    }
}
