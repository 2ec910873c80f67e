//! listpulse Protocol - Core metric types shared by connectors and sinks
//!
//! This crate provides the values that flow from connectors to the telemetry
//! pipeline:
//! - `Metric` - A named measurement with string tags and typed fields
//! - `FieldValue` - Unsigned, integer, float or string field value
//! - `Accumulator` - The sink a connector forwards metrics into
//! - `MetricBuffer` - In-memory accumulator preserving arrival order
//!
//! # Design Principles
//!
//! - **Structural**: Metrics carry values exactly as the source reported them
//! - **Deterministic**: Tags and fields are kept in key order
//! - **Sink-agnostic**: Encoding (JSON, line protocol) is left to the consumer
//!
//! # Example
//!
//! ```
//! use listpulse_protocol::{Accumulator, Metric, MetricBuffer};
//!
//! let mut buffer = MetricBuffer::new();
//! buffer.add_metric(
//!     Metric::new("mailchimplists")
//!         .with_tag("id", "e2b0bdc419")
//!         .with_field("member_count", 23u64),
//! );
//! assert_eq!(buffer.len(), 1);
//! ```

mod accumulator;
mod line;
mod metric;

pub use accumulator::{Accumulator, MetricBuffer};
pub use metric::{FieldValue, Fields, Metric, Tags};
