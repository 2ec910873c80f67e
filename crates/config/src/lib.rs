//! listpulse Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Only connectors need to be configured; everything else has defaults.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use listpulse_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str(r#"
//! [connectors.newsletter]
//! type = "mailchimp"
//! api_key = "0123456789abcdef-us6"
//! "#).unwrap();
//! assert_eq!(config.connectors.len(), 1);
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [log]
//! level = "debug"
//! format = "json"
//! output = "stderr"
//!
//! [connectors.newsletter]
//! type = "mailchimp"
//! api_key = "0123456789abcdef-us6"
//! timeout_secs = 4
//! ```

mod connectors;
mod error;
mod logging;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use connectors::{ConnectorsConfig, RawConnectorConfig};
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Pull-based connectors (Mailchimp, etc.)
    pub connectors: ConnectorsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// A config that declares connectors must leave at least one enabled.
    fn validate(&self) -> Result<()> {
        if !self.connectors.is_empty() && self.connectors.enabled().next().is_none() {
            return Err(ConfigError::NoConnectorsEnabled);
        }
        Ok(())
    }

    /// Get list of enabled connector names, sorted
    pub fn enabled_connectors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .connectors
            .enabled()
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.connectors.is_empty());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[log]
level = "debug"
format = "json"

[connectors.newsletter]
type = "mailchimp"
api_key = "abc-us6"
days_old = 7

[connectors.archive]
type = "mailchimp"
enabled = false
api_key = "def-us1"
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.connectors.len(), 2);
        assert_eq!(config.enabled_connectors(), vec!["newsletter"]);
    }

    #[test]
    fn test_all_connectors_disabled() {
        let toml = r#"
[connectors.newsletter]
type = "mailchimp"
enabled = false
api_key = "abc-us6"
"#;
        let result = Config::from_str(toml);
        assert!(matches!(result, Err(ConfigError::NoConnectorsEnabled)));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_connector_without_type() {
        let toml = r#"
[connectors.newsletter]
api_key = "abc-us6"
"#;
        assert!(Config::from_str(toml).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[connectors.newsletter]\ntype = \"mailchimp\"\napi_key = \"abc-us6\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.connectors.get("newsletter").is_some());
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_str(include_str!("../../../configs/listpulse.toml")).unwrap();
        assert_eq!(config.log.output, LogOutput::Stderr);
        assert_eq!(config.enabled_connectors(), vec!["newsletter"]);
        assert_eq!(
            config.connectors.get("newsletter").unwrap().connector_type,
            "mailchimp"
        );
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/listpulse.toml");
        match result {
            Err(ConfigError::IoError { path, .. }) => {
                assert_eq!(path, "/nonexistent/listpulse.toml");
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
