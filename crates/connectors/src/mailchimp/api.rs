//! Mailchimp Marketing API v3 wire types and endpoint helpers

use crate::error::ConnectorError;
use serde::Deserialize;
use serde_json::Number;

/// Host suffix of the regional API endpoints
const API_HOST_SUFFIX: &str = "api.mailchimp.com";

/// API version path segment
const API_VERSION: &str = "3.0";

/// Extract the datacenter from an API key of the form `<secret>-<dc>`
pub fn datacenter(api_key: &str) -> Result<&str, ConnectorError> {
    let (_, dc) = api_key.rsplit_once('-').ok_or_else(|| {
        ConnectorError::ConfigError(
            "Mailchimp api_key has no '-<datacenter>' suffix".to_string(),
        )
    })?;

    if dc.is_empty() || !dc.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConnectorError::ConfigError(format!(
            "Mailchimp api_key has invalid datacenter suffix: {:?}",
            dc
        )));
    }

    Ok(dc)
}

/// Regional base URL for an API key (`https://<dc>.api.mailchimp.com/3.0`)
pub fn base_url(api_key: &str) -> Result<String, ConnectorError> {
    let dc = datacenter(api_key)?;
    Ok(format!("https://{}.{}/{}", dc, API_HOST_SUFFIX, API_VERSION))
}

// --- API Response Types ---

/// Response of `GET /lists`
#[derive(Debug, Clone, Deserialize)]
pub struct ListsResponse {
    /// Lists in the order the API returned them
    pub lists: Vec<List>,
    /// Total number of lists in the account (pagination metadata)
    #[serde(default)]
    pub total_items: Option<u64>,
}

/// A single mailing list
#[derive(Debug, Clone, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    pub stats: ListStats,
}

/// Aggregate statistics of a list
///
/// Every field is required; a payload missing one is rejected rather than
/// reported as zero. The subscription rates arrive as whole numbers or
/// decimals depending on the account, so they keep the JSON number as sent.
#[derive(Debug, Clone, Deserialize)]
pub struct ListStats {
    pub member_count: u64,
    pub unsubscribe_count: u64,
    pub cleaned_count: u64,
    pub member_count_since_send: u64,
    pub unsubscribe_count_since_send: u64,
    pub cleaned_count_since_send: u64,
    pub campaign_count: u64,
    pub campaign_last_sent: String,
    pub merge_field_count: u64,
    pub avg_sub_rate: Number,
    pub avg_unsub_rate: Number,
    pub target_sub_rate: Number,
    pub open_rate: f64,
    pub click_rate: f64,
    pub last_sub_date: String,
    pub last_unsub_date: String,
}

/// Problem document returned by the API on errors
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiProblem {
    status: u16,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    detail: String,
}

impl ApiProblem {
    fn is_error(&self) -> bool {
        self.status != 0 || !self.title.is_empty()
    }
}

impl From<ApiProblem> for ConnectorError {
    fn from(p: ApiProblem) -> Self {
        ConnectorError::Api {
            status: p.status,
            title: p.title,
            kind: p.kind,
            detail: p.detail,
        }
    }
}

/// Decode a `GET /lists` body
///
/// A body that is not a lists payload but is a problem document yields
/// `ConnectorError::Api`; anything else yields `ConnectorError::Json`.
pub(crate) fn decode_lists(body: &[u8]) -> Result<ListsResponse, ConnectorError> {
    match serde_json::from_slice::<ListsResponse>(body) {
        Ok(lists) => Ok(lists),
        Err(e) => match serde_json::from_slice::<ApiProblem>(body) {
            Ok(problem) if problem.is_error() => Err(problem.into()),
            _ => Err(ConnectorError::Json(e)),
        },
    }
}
