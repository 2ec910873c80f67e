//! Error types for connectors

use thiserror::Error;

/// Errors that can occur during connector operations
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Failed to initialize connector (e.g., HTTP client creation failed)
    #[error("failed to initialize connector: {0}")]
    Init(String),

    /// Configuration error (e.g., malformed API key)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport-level failure: connect, DNS, timeout or body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-200 status
    #[error("{url} returned HTTP status {status}: {body:?}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        /// Leading bytes of the response body, if any
        body: String,
    },

    /// API answered 200 with an error document instead of data
    #[error("API error {status}: {title}. See {kind}")]
    Api {
        status: u16,
        title: String,
        kind: String,
        detail: String,
    },

    /// JSON parsing failed or the payload does not match the schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error classification for callers deciding how to report a failed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad configuration; retrying will not help
    Configuration,
    /// Transport failure
    Network,
    /// Unexpected HTTP status or API error response
    Protocol,
    /// Response body could not be decoded
    Decode,
}

impl ConnectorError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Init(_) | Self::ConfigError(_) => ErrorKind::Configuration,
            Self::Http(_) => ErrorKind::Network,
            Self::Status { .. } | Self::Api { .. } => ErrorKind::Protocol,
            Self::Json(_) => ErrorKind::Decode,
        }
    }
}
