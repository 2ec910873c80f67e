//! Connector configuration types
//!
//! Each connector defines its own config struct here.
//! Configs are parsed from raw TOML values provided by the config crate.

use crate::error::ConnectorError;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default HTTP client timeout for Mailchimp requests
pub const MAILCHIMP_DEFAULT_TIMEOUT_SECS: u64 = 4;

/// Mailchimp connector configuration
///
/// Pulls per-list statistics from the Mailchimp Marketing API.
///
/// # Example
///
/// ```toml
/// [connectors.newsletter]
/// type = "mailchimp"
/// api_key = "0123456789abcdef-us6"   # <secret>-<datacenter>
/// campaign_id = "42694e9e57"         # optional, accepted but not applied
/// days_old = 7                       # optional, accepted but not applied
/// timeout_secs = 4                   # optional, HTTP client timeout
/// api_url = "https://proxy.local/3.0" # optional base URL override
/// ```
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailChimpConnectorConfig {
    /// API key; the suffix after the last `-` names the datacenter
    pub api_key: String,

    /// Campaign to report on (not applied to list statistics)
    pub campaign_id: Option<String>,

    /// Only consider campaigns sent within this many days (not applied to list statistics)
    pub days_old: Option<u32>,

    /// Request timeout in seconds (default: 4)
    pub timeout_secs: u64,

    /// Base URL override (default: derived from the API key)
    pub api_url: Option<String>,
}

impl Default for MailChimpConnectorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            campaign_id: None,
            days_old: None,
            timeout_secs: MAILCHIMP_DEFAULT_TIMEOUT_SECS,
            api_url: None,
        }
    }
}

impl fmt::Debug for MailChimpConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailChimpConnectorConfig")
            .field("api_key", &"<redacted>")
            .field("campaign_id", &self.campaign_id)
            .field("days_old", &self.days_old)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl MailChimpConnectorConfig {
    /// Config with only an API key set
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Parse config from raw TOML value
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConnectorError> {
        let config: MailChimpConnectorConfig = value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| {
                ConnectorError::ConfigError(format!("Invalid Mailchimp config: {}", e))
            })?;

        if config.api_key.is_empty() {
            return Err(ConnectorError::ConfigError(
                "Mailchimp api_key is required".to_string(),
            ));
        }

        Ok(config)
    }

    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
