use serde_json::Value;
use tracing::debug;

use crate::error::AdapterError;
use crate::metrics::base::{lookup, lookup_f64, numeric_perf_data};
use crate::parsing::ratio;
use crate::thresholds::ThresholdTable;
use crate::types::{format_number, Metric, MetricValue, Reading};

/// The node a `/_nodes/<name>/stats` response is about. A name that matches
/// several nodes yields the first one by id.
pub fn first_node(payload: &Value) -> Result<(&str, &Value), AdapterError> {
    let nodes = lookup(payload, "", &["nodes"])?
        .as_object()
        .ok_or_else(|| AdapterError::WrongType {
            path: "nodes".to_string(),
            expected: "an object",
        })?;
    let (id, node) = nodes.iter().next().ok_or(AdapterError::NoNodes)?;
    debug!(node_id = %id, name = ?node.get("name").and_then(|v| v.as_str()), "selected node");
    Ok((id.as_str(), node))
}

fn numeric_reading(
    metric: Metric,
    value: f64,
    message: String,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    Ok(Reading {
        value: MetricValue::Numeric(value),
        thresholds: thresholds.get(metric)?.clone(),
        message,
        perf_data: numeric_perf_data(perf_data, metric.perf_key(), value),
    })
}

pub fn analyze_heap_used_percent(
    payload: &Value,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    let (id, node) = first_node(payload)?;
    let prefix = format!("nodes.{}", id);
    let percent = lookup_f64(node, &prefix, &["jvm", "mem", "heap_used_percent"])?;

    numeric_reading(
        Metric::HeapUsedPercent,
        percent,
        format!("The Heap used percent is {}%", format_number(percent)),
        thresholds,
        perf_data,
    )
}

pub fn analyze_documents_count(
    payload: &Value,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    let (id, node) = first_node(payload)?;
    let prefix = format!("nodes.{}", id);
    let count = lookup_f64(node, &prefix, &["indices", "docs", "count"])?;

    numeric_reading(
        Metric::DocumentsCount,
        count,
        format!("The documents count is {}", format_number(count)),
        thresholds,
        perf_data,
    )
}

/// Average time per search query, both counters read from the same payload.
pub fn analyze_search_query_time_ratio(
    payload: &Value,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    let (id, node) = first_node(payload)?;
    let prefix = format!("nodes.{}", id);
    let query_time = lookup_f64(node, &prefix, &["indices", "search", "query_time_in_millis"])?;
    let query_total = lookup_f64(node, &prefix, &["indices", "search", "query_total"])?;
    let avg = ratio(query_time, query_total).ok_or(AdapterError::UndefinedRatio { query_time })?;

    numeric_reading(
        Metric::SearchQueryTimeRatio,
        avg,
        format!("The search query time ratio is {}ms", format_number(avg)),
        thresholds,
        perf_data,
    )
}
