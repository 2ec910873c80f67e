//! List record to metric mapping

use super::api::List;
use listpulse_protocol::{FieldValue, Metric};
use serde_json::Number;

/// Measurement name of list metrics
pub const MEASUREMENT: &str = "mailchimplists";

/// Convert one list into its metric
///
/// Values are relabeled, never converted: counts stay unsigned integers,
/// rates keep the number type the API sent and timestamps stay strings
/// (including `""`).
pub fn map_list(list: &List) -> Metric {
    let stats = &list.stats;

    Metric::new(MEASUREMENT)
        .with_tag("id", list.id.as_str())
        .with_tag("list_name", list.name.as_str())
        .with_field("member_count", stats.member_count)
        .with_field("unsubscribe_count", stats.unsubscribe_count)
        .with_field("cleaned_count", stats.cleaned_count)
        .with_field("member_count_since_send", stats.member_count_since_send)
        .with_field("unsubscribe_count_since_send", stats.unsubscribe_count_since_send)
        .with_field("cleaned_count_since_send", stats.cleaned_count_since_send)
        .with_field("campaign_count", stats.campaign_count)
        .with_field("campaign_last_sent", stats.campaign_last_sent.as_str())
        .with_field("merge_field_count", stats.merge_field_count)
        .with_field("avg_sub_rate", number_field(&stats.avg_sub_rate))
        .with_field("avg_unsub_rate", number_field(&stats.avg_unsub_rate))
        .with_field("target_sub_rate", number_field(&stats.target_sub_rate))
        .with_field("open_rate", stats.open_rate)
        .with_field("click_rate", stats.click_rate)
        .with_field("last_sub_date", stats.last_sub_date.as_str())
        .with_field("last_unsub_date", stats.last_unsub_date.as_str())
}

/// Field value for a JSON number, keeping integers as integers
fn number_field(n: &Number) -> FieldValue {
    if let Some(v) = n.as_u64() {
        FieldValue::Unsigned(v)
    } else if let Some(v) = n.as_i64() {
        FieldValue::Integer(v)
    } else {
        // Finite without arbitrary_precision, so as_f64 always succeeds
        FieldValue::Float(n.as_f64().unwrap_or_default())
    }
}
