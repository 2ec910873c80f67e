//! listpulse - Connectors
//!
//! Pull-based connectors that fetch statistics from external services and
//! forward them as `Metric` records to an `Accumulator`.
//!
//! # Available Connectors
//!
//! - **Mailchimp** - Mailing-list statistics (members, unsubscribes, open/click rates)
//!
//! # Design Principles
//!
//! - **Pull-based**: Connectors fetch data when the caller runs a cycle
//! - **One cycle, one request**: No retry, caching or pagination inside a connector
//! - **All or nothing**: A failed cycle emits no metrics
//! - **Simple interface**: Each connector implements the `Connector` trait
//!
//! # Feature Flags
//!
//! ```toml
//! [dependencies]
//! listpulse-connectors = { version = "0.1", default-features = false, features = ["mailchimp"] }
//! ```
//!
//! Available features:
//! - `mailchimp` (default) - Mailchimp list statistics
//!
//! # Example
//!
//! ```ignore
//! use listpulse_connectors::{Connector, MailChimp, MailChimpConnectorConfig};
//! use listpulse_protocol::MetricBuffer;
//!
//! let mailchimp = MailChimp::from_config(&MailChimpConnectorConfig::with_api_key("xxx-us6"))?;
//!
//! let mut buffer = MetricBuffer::new();
//! mailchimp.collect(&mut buffer).await?;
//! // buffer now holds one `mailchimplists` metric per list
//! ```

pub mod config;
mod error;
mod logger;
mod traits;

// Conditionally compiled connectors
#[cfg(feature = "mailchimp")]
pub mod mailchimp;

// Re-exports
pub use error::{ConnectorError, ErrorKind};
pub use logger::{Logger, TracingLogger};
pub use traits::Connector;

#[cfg(feature = "mailchimp")]
pub use config::MailChimpConnectorConfig;
#[cfg(feature = "mailchimp")]
pub use mailchimp::MailChimp;

/// List of available connector types (compiled in)
pub fn available_connectors() -> &'static [&'static str] {
    &[
        #[cfg(feature = "mailchimp")]
        "mailchimp",
    ]
}
