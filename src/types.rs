use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub client_node: String,
    pub node_name: String,
    pub port: u16,
    pub perf_data: bool,
    pub only_graph: bool,
    pub check: Check,
}

/// The single check an invocation runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    ClusterHealth,
    HeapUsedPercent,
    DocumentsCount,
    SearchQueryTimeRatio,
    LastEntryAge {
        index: String,
        timestamp_field: String,
    },
}

impl Check {
    pub fn metric(&self) -> Metric {
        match self {
            Check::ClusterHealth => Metric::ClusterHealth,
            Check::HeapUsedPercent => Metric::HeapUsedPercent,
            Check::DocumentsCount => Metric::DocumentsCount,
            Check::SearchQueryTimeRatio => Metric::SearchQueryTimeRatio,
            Check::LastEntryAge { .. } => Metric::LastEntryAge,
        }
    }
}

/// Key into the threshold table; also names the perf-data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ClusterHealth,
    HeapUsedPercent,
    DocumentsCount,
    SearchQueryTimeRatio,
    LastEntryAge,
}

impl Metric {
    pub fn perf_key(&self) -> &'static str {
        match self {
            Metric::ClusterHealth => "cluster_status",
            Metric::HeapUsedPercent => "heap_used_percent",
            Metric::DocumentsCount => "documents_count",
            Metric::SearchQueryTimeRatio => "search_query_time_ratio",
            Metric::LastEntryAge => "last_entry_age",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::ClusterHealth => "cluster-health",
            Metric::HeapUsedPercent => "heap-used-percent",
            Metric::DocumentsCount => "documents-count",
            Metric::SearchQueryTimeRatio => "search-query-time-ratio",
            Metric::LastEntryAge => "last-entry-age",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
    /// Only-graph output: never alerts.
    Info,
}

impl Severity {
    pub fn exit_code(&self) -> u8 {
        match self {
            Severity::Ok | Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Numeric(f64),
    Categorical(String),
}

impl MetricValue {
    /// Text used for set membership and messages.
    pub fn label(&self) -> String {
        match self {
            MetricValue::Numeric(v) => format_number(*v),
            MetricValue::Categorical(s) => s.clone(),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdConfig {
    Numeric {
        critical: f64,
        warning: f64,
    },
    Categorical {
        critical: BTreeSet<String>,
        warning: BTreeSet<String>,
        ok: BTreeSet<String>,
    },
}

impl ThresholdConfig {
    pub fn numeric(critical: f64, warning: f64) -> Self {
        ThresholdConfig::Numeric { critical, warning }
    }

    pub fn categorical(critical: &[&str], warning: &[&str], ok: &[&str]) -> Self {
        let set = |values: &[&str]| -> BTreeSet<String> { values.iter().map(|v| v.to_string()).collect() };
        ThresholdConfig::Categorical {
            critical: set(critical),
            warning: set(warning),
            ok: set(ok),
        }
    }
}

/// What an adapter hands to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: MetricValue,
    pub thresholds: ThresholdConfig,
    pub message: String,
    pub perf_data: Option<String>,
}

/// Integral values print bare, everything else with two decimals.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
