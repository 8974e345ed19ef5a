use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::AdapterError;
use crate::metrics::base::{lookup, numeric_perf_data};
use crate::parsing::{age_seconds, parse_timestamp};
use crate::thresholds::ThresholdTable;
use crate::types::{format_number, Metric, MetricValue, Reading};

/// Age of the newest entry of a `size=1`, descending-sorted `_search`.
///
/// The hit's `sort` value (epoch millis for date fields) is preferred; the
/// `_source` field is the fallback for string-sorted fields.
pub fn analyze_last_entry_age(
    payload: &Value,
    index: &str,
    timestamp_field: &str,
    now: DateTime<Utc>,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    let hits = lookup(payload, "", &["hits", "hits"])?
        .as_array()
        .ok_or_else(|| AdapterError::WrongType {
            path: "hits.hits".to_string(),
            expected: "an array",
        })?;
    let hit = hits.first().ok_or_else(|| AdapterError::NoEntries {
        index: index.to_string(),
    })?;

    let last_entry = match hit.get("sort").and_then(|s| s.get(0)).and_then(parse_timestamp) {
        Some(ts) => ts,
        None => {
            let raw = lookup(hit, "hits.hits.0", &["_source", timestamp_field])?;
            parse_timestamp(raw).ok_or_else(|| AdapterError::InvalidTimestamp {
                path: format!("hits.hits.0._source.{}", timestamp_field),
                raw: raw.to_string(),
            })?
        }
    };
    let age = age_seconds(last_entry, now) as f64;
    debug!(%last_entry, age, "last entry");

    let metric = Metric::LastEntryAge;
    Ok(Reading {
        value: MetricValue::Numeric(age),
        thresholds: thresholds.get(metric)?.clone(),
        message: format!("The last entry in {} is {}s old", index, format_number(age)),
        perf_data: numeric_perf_data(perf_data, metric.perf_key(), age),
    })
}
