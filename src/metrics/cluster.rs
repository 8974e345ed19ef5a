use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::AdapterError;
use crate::thresholds::ThresholdTable;
use crate::types::{Metric, MetricValue, Reading};

/// Numeric stand-ins so the status can be graphed.
pub const CLUSTER_STATUS_PERF: &[(&str, u8)] = &[("green", 2), ("yellow", 1), ("red", 0)];

#[derive(Debug, Deserialize)]
pub struct ClusterHealthResponse {
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

pub fn analyze_cluster_health(
    payload: &Value,
    thresholds: &ThresholdTable,
    perf_data: bool,
) -> Result<Reading, AdapterError> {
    let health: ClusterHealthResponse =
        serde_json::from_value(payload.clone()).map_err(|e| AdapterError::Malformed {
            what: "cluster health",
            reason: e.to_string(),
        })?;
    let status = health.status.ok_or_else(|| AdapterError::MissingField {
        path: "status".to_string(),
    })?;
    debug!(cluster = ?health.cluster_name, %status, "cluster health");

    let metric = Metric::ClusterHealth;
    let perf_data = if perf_data {
        CLUSTER_STATUS_PERF
            .iter()
            .find(|(name, _)| *name == status)
            .map(|(_, code)| format!("{}={}", metric.perf_key(), code))
    } else {
        None
    };

    Ok(Reading {
        message: format!("The cluster health status is {}", status),
        value: MetricValue::Categorical(status),
        thresholds: thresholds.get(metric)?.clone(),
        perf_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_reading;
    use crate::types::Severity;
    use serde_json::json;

    fn run(status: &str, perf: bool) -> crate::report::CheckResult {
        let body = json!({"cluster_name": "search", "status": status, "number_of_nodes": 3});
        let reading = analyze_cluster_health(&body, &ThresholdTable::defaults(), perf).unwrap();
        evaluate_reading(reading, false)
    }

    #[test]
    fn test_green_is_ok() {
        let result = run("green", false);
        assert_eq!(result.severity, Severity::Ok);
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.line(), "OK - The cluster health status is green");
    }

    #[test]
    fn test_green_with_perf_data() {
        let result = run("green", true);
        assert!(result.line().ends_with("| cluster_status=2"));
        assert_eq!(result.line(), "OK - The cluster health status is green | cluster_status=2");
    }

    #[test]
    fn test_yellow_and_red() {
        let yellow = run("yellow", true);
        assert_eq!(yellow.severity, Severity::Warning);
        assert_eq!(yellow.line(), "WARNING - The cluster health status is yellow | cluster_status=1");

        let red = run("red", true);
        assert_eq!(red.severity, Severity::Critical);
        assert_eq!(red.exit_code(), 2);
        assert_eq!(red.line(), "CRITICAL - The cluster health status is red | cluster_status=0");
    }

    #[test]
    fn test_unexpected_status() {
        let body = json!({"status": "purple"});
        let reading = analyze_cluster_health(&body, &ThresholdTable::defaults(), true).unwrap();
        assert_eq!(reading.perf_data, None);
        let result = evaluate_reading(reading, false);
        assert_eq!(result.line(), "UNKNOWN - Unexpected value: purple");
    }

    #[test]
    fn test_missing_status() {
        let err = analyze_cluster_health(&json!({"cluster_name": "search"}), &ThresholdTable::defaults(), false)
            .unwrap_err();
        assert_eq!(err, AdapterError::MissingField { path: "status".into() });
    }

    #[test]
    fn test_malformed_payload() {
        let err = analyze_cluster_health(&json!({"status": 1}), &ThresholdTable::defaults(), false).unwrap_err();
        assert!(matches!(err, AdapterError::Malformed { what: "cluster health", .. }));

        let err = analyze_cluster_health(&json!("green"), &ThresholdTable::defaults(), false).unwrap_err();
        assert!(matches!(err, AdapterError::Malformed { .. }));
    }
}
