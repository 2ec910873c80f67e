//! Metric sinks
//!
//! Connectors never talk to the telemetry pipeline directly; they forward
//! every metric of a collection cycle into an `Accumulator`.

use crate::metric::{Fields, Metric, Tags};

/// Receiver for metrics produced by a collection cycle
pub trait Accumulator {
    /// Accept one metric
    fn add_metric(&mut self, metric: Metric);

    /// Accept a metric given as name, fields and tags
    fn add_fields(&mut self, name: &str, fields: Fields, tags: Tags) {
        self.add_metric(Metric::from_parts(name, tags, fields));
    }
}

impl<A: Accumulator + ?Sized> Accumulator for &mut A {
    fn add_metric(&mut self, metric: Metric) {
        (**self).add_metric(metric);
    }
}

/// In-memory accumulator that keeps metrics in arrival order
#[derive(Debug, Clone, Default)]
pub struct MetricBuffer {
    metrics: Vec<Metric>,
}

impl MetricBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics received so far
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Number of metrics received
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether no metric has been received
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Consume the buffer, returning the metrics
    pub fn into_inner(self) -> Vec<Metric> {
        self.metrics
    }
}

impl Accumulator for MetricBuffer {
    fn add_metric(&mut self, metric: Metric) {
        self.metrics.push(metric);
    }
}
