//! Threshold evaluation.
//!
//! Numeric readings are compared against `critical` then `warning` with `>=`;
//! everything else goes through set membership, critical before warning before
//! ok. Only-graph mode skips both and reports `Severity::Info`.

use tracing::debug;

use crate::report::CheckResult;
use crate::types::{MetricValue, Reading, Severity, ThresholdConfig};

pub fn evaluate(
    value: &MetricValue,
    config: &ThresholdConfig,
    only_graph: bool,
    message: String,
) -> CheckResult {
    if only_graph {
        return CheckResult::new(Severity::Info, message);
    }

    let severity = match (value, config) {
        (MetricValue::Numeric(v), ThresholdConfig::Numeric { critical, warning }) => {
            numeric_severity(*v, *critical, *warning)
        }
        (value, config) => categorical_severity(&value.label(), config),
    };
    debug!(%value, %severity, "evaluated");

    match severity {
        Severity::Unknown => CheckResult::new(Severity::Unknown, format!("Unexpected value: {}", value)),
        severity => CheckResult::new(severity, message),
    }
}

/// Evaluate an adapter reading, carrying its perf-data along unless the value
/// could not be classified.
pub fn evaluate_reading(reading: Reading, only_graph: bool) -> CheckResult {
    let result = evaluate(&reading.value, &reading.thresholds, only_graph, reading.message);
    if result.severity == Severity::Unknown {
        return result;
    }
    result.with_perf_data(reading.perf_data)
}

// Bounds are not checked for ordering: critical wins whenever both match.
fn numeric_severity(value: f64, critical: f64, warning: f64) -> Severity {
    if value >= critical {
        Severity::Critical
    } else if value >= warning {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

fn categorical_severity(label: &str, config: &ThresholdConfig) -> Severity {
    match config {
        ThresholdConfig::Categorical { critical, warning, ok } => {
            if critical.contains(label) {
                Severity::Critical
            } else if warning.contains(label) {
                Severity::Warning
            } else if ok.contains(label) {
                Severity::Ok
            } else {
                Severity::Unknown
            }
        }
        // a categorical value has no place on a numeric scale
        ThresholdConfig::Numeric { .. } => Severity::Unknown,
    }
}
