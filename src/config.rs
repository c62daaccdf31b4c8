//! Configuration for placement resolution
//!
//! Names the record attributes that hold the order specifier and the unique
//! identifier. Can be built in code or loaded from a TOML file:
//!
//! ```toml
//! [keys]
//! order = "position"
//! id = "id"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Attribute keys used to read records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Attribute holding the order specifier(s)
    pub order_key: String,

    /// Attribute holding the unique identifier
    pub id_key: String,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    keys: TomlKeys,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlKeys {
    order: Option<String>,
    id: Option<String>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            order_key: "position".to_string(),
            id_key: "id".to_string(),
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order specifier attribute
    pub fn with_order_key(mut self, key: impl Into<String>) -> Self {
        self.order_key = key.into();
        self
    }

    /// Set the identifier attribute
    pub fn with_id_key(mut self, key: impl Into<String>) -> Self {
        self.id_key = key.into();
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();
        if let Some(order) = parsed.keys.order {
            config.order_key = order;
        }
        if let Some(id) = parsed.keys.id {
            config.id_key = id;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.order_key, "position");
        assert_eq!(config.id_key, "id");
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_order_key("placement")
            .with_id_key("name");

        assert_eq!(config.order_key, "placement");
        assert_eq!(config.id_key, "name");
    }

    #[test]
    fn test_parse_toml_full() {
        let config = PlacementConfig::from_toml(
            r#"
[keys]
order = "slot"
id = "key"
"#,
        )
        .expect("Should parse");
        assert_eq!(config.order_key, "slot");
        assert_eq!(config.id_key, "key");
    }

    #[test]
    fn test_parse_toml_partial_keeps_defaults() {
        let config = PlacementConfig::from_toml("[keys]\nid = \"name\"\n").expect("Should parse");
        assert_eq!(config.order_key, "position");
        assert_eq!(config.id_key, "name");
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = PlacementConfig::from_toml("").expect("Should parse");
        assert_eq!(config, PlacementConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = PlacementConfig::from_toml("[keys]\nrank = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = PlacementConfig::from_toml("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
