//! Mailchimp connector for pulling mailing-list statistics
//!
//! Fetches per-list statistics (members, unsubscribes, open/click rates, etc.)
//! from the Mailchimp Marketing API and emits one `mailchimplists` metric per
//! list.
//!
//! Each collection cycle is a single `GET {base}/lists` request with HTTP
//! Basic auth. There is no retry: a failed cycle returns the error and emits
//! nothing, leaving retry policy to whoever schedules the cycles.

mod api;
mod mapper;

pub use api::{List, ListStats, ListsResponse, base_url, datacenter};
pub use mapper::{MEASUREMENT, map_list};

use crate::config::MailChimpConnectorConfig;
use crate::error::ConnectorError;
use crate::logger::{Logger, TracingLogger};
use crate::traits::Connector;
use listpulse_protocol::Accumulator;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use std::fmt;
use std::sync::Arc;

/// Username sent with Basic auth; the API only checks the password
const BASIC_AUTH_USER: &str = "listpulse";

/// Maximum number of body bytes kept for a non-200 error message
const MAX_ERROR_BODY_BYTES: usize = 200;

/// Mailchimp connector for fetching list statistics
pub struct MailChimp {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for MailChimp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailChimp")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl MailChimp {
    /// Create a new Mailchimp connector
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key carries no datacenter suffix and
    /// `Init` if HTTP client creation fails.
    pub fn new(
        config: MailChimpConnectorConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, ConnectorError> {
        let derived = base_url(&config.api_key)?;
        let api_url = match config.api_url.as_deref() {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => derived,
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("listpulse/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConnectorError::Init(format!("Mailchimp HTTP client: {}", e)))?;

        if let Some(ref campaign_id) = config.campaign_id {
            logger.debug(&format!(
                "campaign_id {} is configured but list statistics are not filtered by campaign",
                campaign_id
            ));
        }
        if let Some(days_old) = config.days_old {
            logger.debug(&format!(
                "days_old {} is configured but list statistics are not filtered by age",
                days_old
            ));
        }

        Ok(Self {
            api_key: config.api_key,
            api_url,
            client,
            logger,
        })
    }

    /// Create a Mailchimp connector from connector config (from TOML),
    /// logging through `tracing`
    ///
    /// # Errors
    ///
    /// Same as [`MailChimp::new`]
    pub fn from_config(config: &MailChimpConnectorConfig) -> Result<Self, ConnectorError> {
        Self::new(config.clone(), Arc::new(TracingLogger::new("mailchimp")))
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch all lists with their statistics (single attempt)
    ///
    /// # Errors
    ///
    /// - `Http` on transport failure
    /// - `Status` if the API answers anything but 200
    /// - `Api` if a 200 body is a Mailchimp problem document
    /// - `Json` if the body does not decode into lists
    pub async fn fetch_lists(&self) -> Result<ListsResponse, ConnectorError> {
        let url = format!("{}/lists", self.api_url);
        self.logger.debug(&format!("request URL: {}", url));

        let response = self
            .client
            .get(&url)
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // Unreadable body: report the status alone
            let body = response
                .bytes()
                .await
                .map(|b| truncate_body(&b))
                .unwrap_or_default();
            return Err(ConnectorError::Status { url, status, body });
        }

        let body = response.bytes().await?;
        self.logger.debug(&format!("response body: {} bytes", body.len()));

        let lists = api::decode_lists(&body)?;
        self.logger.debug(&format!(
            "received {} lists (total_items: {})",
            lists.lists.len(),
            lists
                .total_items
                .map_or_else(|| "unknown".to_string(), |n| n.to_string())
        ));

        Ok(lists)
    }
}

impl Connector for MailChimp {
    fn name(&self) -> &'static str {
        "mailchimp"
    }

    async fn collect<A: Accumulator + Send>(&self, acc: &mut A) -> Result<(), ConnectorError> {
        let response = self.fetch_lists().await?;

        for list in &response.lists {
            acc.add_metric(map_list(list));
        }

        self.logger.debug(&format!(
            "emitted {} {} metrics",
            response.lists.len(),
            MEASUREMENT
        ));

        Ok(())
    }
}

/// Keep at most `MAX_ERROR_BODY_BYTES` of a response body as text
pub(crate) fn truncate_body(body: &[u8]) -> String {
    let end = body.len().min(MAX_ERROR_BODY_BYTES);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
