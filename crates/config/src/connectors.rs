//! Connector configuration types
//!
//! Generic configuration for pull-based connectors (Mailchimp, etc.)
//! Connector-specific config parsing is handled by the connectors crate.
//!
//! # Example
//!
//! ```toml
//! [connectors.newsletter]
//! type = "mailchimp"
//! api_key = "0123456789abcdef-us6"
//!
//! [connectors.old_account]
//! type = "mailchimp"
//! enabled = false
//! api_key = "fedcba9876543210-us1"
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Container for all connector configurations
///
/// Connectors are stored as a map of name -> raw config.
/// Each connector type parses its own config from the raw TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectorsConfig {
    /// Named connector instances
    #[serde(flatten)]
    connectors: HashMap<String, RawConnectorConfig>,
}

impl ConnectorsConfig {
    /// Get a connector config by name
    pub fn get(&self, name: &str) -> Option<&RawConnectorConfig> {
        self.connectors.get(name)
    }

    /// Iterate over enabled connectors only
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &RawConnectorConfig)> {
        self.connectors.iter().filter(|(_, c)| c.is_enabled())
    }

    /// Get the number of configured connectors
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Check if no connectors are configured
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }
}

/// Raw connector configuration
///
/// Contains the connector type and raw config values.
/// Each connector implementation parses its specific config from `config`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConnectorConfig {
    /// Connector type (e.g., "mailchimp")
    #[serde(rename = "type")]
    pub connector_type: String,

    /// Whether this connector is enabled
    /// Default: true
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Raw connector-specific configuration
    /// Parsed by the connector implementation
    #[serde(flatten)]
    pub config: toml::Value,
}

fn default_enabled() -> bool {
    true
}

impl RawConnectorConfig {
    /// Check if this connector is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_connectors() {
        let config: ConnectorsConfig = toml::from_str("").unwrap();
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
    }

    #[test]
    fn test_single_connector() {
        let toml = r#"
[newsletter]
type = "mailchimp"
api_key = "abc-us6"
"#;
        let config: ConnectorsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.len(), 1);
        let connector = config.get("newsletter").unwrap();
        assert_eq!(connector.connector_type, "mailchimp");
        assert!(connector.is_enabled());
        assert_eq!(
            connector.config.get("api_key").and_then(|v| v.as_str()),
            Some("abc-us6")
        );
    }

    #[test]
    fn test_multiple_connectors_keep_their_type() {
        let toml = r#"
[newsletter]
type = "mailchimp"
api_key = "abc-us6"

[archive]
type = "mailchimp"
api_key = "def-us1"

[other]
type = "unknown"
"#;
        let config: ConnectorsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("archive").unwrap().connector_type, "mailchimp");
        assert_eq!(config.get("other").unwrap().connector_type, "unknown");
        assert_eq!(config.enabled().count(), 3);
    }

    #[test]
    fn test_disabled_connector() {
        let toml = r#"
[newsletter]
type = "mailchimp"
enabled = false
api_key = "abc-us6"

[live]
type = "mailchimp"
api_key = "def-us6"
"#;
        let config: ConnectorsConfig = toml::from_str(toml).unwrap();
        assert!(!config.get("newsletter").unwrap().is_enabled());

        let enabled: Vec<_> = config.enabled().map(|(name, _)| name.as_str()).collect();
        assert_eq!(enabled, vec!["live"]);
    }
}
