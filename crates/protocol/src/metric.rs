//! Metric and field value types

use serde::Serialize;
use std::collections::BTreeMap;

/// Metric tags (string key/value pairs used for series identity)
pub type Tags = BTreeMap<String, String>;

/// Metric fields (the measured values)
pub type Fields = BTreeMap<String, FieldValue>;

/// A single typed field value
///
/// The variant records the type the source reported, so an integer count is
/// never silently widened into a float on its way to the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Non-negative count
    Unsigned(u64),
    /// Signed integer
    Integer(i64),
    /// Floating point value (rates, ratios)
    Float(f64),
    /// String value (timestamps, labels); may be empty
    String(String),
}

impl FieldValue {
    /// Get the value as `f64` if it is a float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A tagged measurement
///
/// # Example
///
/// ```
/// use listpulse_protocol::{FieldValue, Metric};
///
/// let metric = Metric::new("mailchimplists")
///     .with_tag("list_name", "Chimplist")
///     .with_field("open_rate", 35.5);
///
/// assert_eq!(metric.tag("list_name"), Some("Chimplist"));
/// assert_eq!(metric.field("open_rate"), Some(&FieldValue::Float(35.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    name: String,
    tags: Tags,
    fields: Fields,
}

impl Metric {
    /// Create a metric with no tags or fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Tags::new(),
            fields: Fields::new(),
        }
    }

    /// Create a metric from prebuilt tag and field maps
    pub fn from_parts(name: impl Into<String>, tags: Tags, fields: Fields) -> Self {
        Self {
            name: name.into(),
            tags,
            fields,
        }
    }

    /// Add a tag, replacing any previous value for the key
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a field, replacing any previous value for the key
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Measurement name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All tags in key order
    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// All fields in key order
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Look up a tag value
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Look up a field value
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}
