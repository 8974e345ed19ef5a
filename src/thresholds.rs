use std::collections::HashMap;

use crate::error::AdapterError;
use crate::types::{Metric, ThresholdConfig};

pub const HEAP_USED_PERCENT_CRITICAL: f64 = 90.0;
pub const HEAP_USED_PERCENT_WARNING: f64 = 75.0;
pub const DOCUMENTS_COUNT_CRITICAL: f64 = 1_000_000_000.0;
pub const DOCUMENTS_COUNT_WARNING: f64 = 800_000_000.0;
/// Average milliseconds per search query.
pub const SEARCH_QUERY_TIME_RATIO_CRITICAL: f64 = 1000.0;
pub const SEARCH_QUERY_TIME_RATIO_WARNING: f64 = 500.0;
/// Seconds since the newest document was indexed.
pub const LAST_ENTRY_AGE_CRITICAL: f64 = 3600.0;
pub const LAST_ENTRY_AGE_WARNING: f64 = 900.0;

/// Threshold configuration per metric, handed to the adapters.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    entries: HashMap<Metric, ThresholdConfig>,
}

impl ThresholdTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        Self::new()
            .with(
                Metric::ClusterHealth,
                ThresholdConfig::categorical(&["red"], &["yellow"], &["green"]),
            )
            .with(
                Metric::HeapUsedPercent,
                ThresholdConfig::numeric(HEAP_USED_PERCENT_CRITICAL, HEAP_USED_PERCENT_WARNING),
            )
            .with(
                Metric::DocumentsCount,
                ThresholdConfig::numeric(DOCUMENTS_COUNT_CRITICAL, DOCUMENTS_COUNT_WARNING),
            )
            .with(
                Metric::SearchQueryTimeRatio,
                ThresholdConfig::numeric(
                    SEARCH_QUERY_TIME_RATIO_CRITICAL,
                    SEARCH_QUERY_TIME_RATIO_WARNING,
                ),
            )
            .with(
                Metric::LastEntryAge,
                ThresholdConfig::numeric(LAST_ENTRY_AGE_CRITICAL, LAST_ENTRY_AGE_WARNING),
            )
    }

    pub fn with(mut self, metric: Metric, config: ThresholdConfig) -> Self {
        self.entries.insert(metric, config);
        self
    }

    pub fn get(&self, metric: Metric) -> Result<&ThresholdConfig, AdapterError> {
        self.entries
            .get(&metric)
            .ok_or(AdapterError::NoThresholds { metric })
    }
}
