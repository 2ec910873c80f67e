//! Connector trait definition

use crate::error::ConnectorError;
use listpulse_protocol::Accumulator;

/// Trait for pull-based connectors that fetch data from external sources
///
/// A connector is built once from its configuration. Each call to `collect`
/// runs one collection cycle: it queries the external service and forwards
/// the resulting metrics to the accumulator. Cycles are expected to be run
/// sequentially by the caller.
pub trait Connector: Send + Sync {
    /// Returns the connector name (e.g., "mailchimp")
    fn name(&self) -> &'static str;

    /// Run one collection cycle
    ///
    /// # Errors
    ///
    /// Any failure aborts the cycle. No metric is forwarded to `acc` when an
    /// error is returned.
    fn collect<A: Accumulator + Send>(
        &self,
        acc: &mut A,
    ) -> impl std::future::Future<Output = Result<(), ConnectorError>> + Send;
}
