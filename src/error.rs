use thiserror::Error;

use crate::types::{Metric, Severity};

/// Any failure to get a JSON body from an endpoint. The cause is kept for logs
/// only; every variant of it is reported the same way.
#[derive(Debug, Error)]
#[error("Unable to get API url '{url}'")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// The payload was fetched but does not hold what the adapter needs.
#[derive(Debug, Error, PartialEq)]
pub enum AdapterError {
    #[error("missing field `{path}` in response")]
    MissingField { path: String },

    #[error("field `{path}` is not {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("no node matched in node stats response")]
    NoNodes,

    #[error("no entries found in index {index}")]
    NoEntries { index: String },

    #[error("the search query time ratio is undefined (query_total is 0, query_time_in_millis is {query_time})")]
    UndefinedRatio { query_time: f64 },

    #[error("invalid timestamp `{raw}` in field `{path}`")]
    InvalidTimestamp { path: String, raw: String },

    #[error("malformed {what} response: {reason}")]
    Malformed { what: &'static str, reason: String },

    #[error("no thresholds configured for {metric}")]
    NoThresholds { metric: Metric },
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl CheckError {
    pub fn severity(&self) -> Severity {
        match self {
            CheckError::Fetch(_) => Severity::Critical,
            CheckError::Adapter(_) => Severity::Unknown,
        }
    }
}
