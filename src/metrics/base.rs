use serde_json::Value;

use crate::error::AdapterError;
use crate::types::format_number;

/// Walk `path` from `root`, reporting the dotted path on a miss.
pub fn lookup<'a>(root: &'a Value, prefix: &str, path: &[&str]) -> Result<&'a Value, AdapterError> {
    let mut current = root;
    let mut walked = prefix.to_string();
    for key in path {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(key);
        current = current
            .get(*key)
            .ok_or_else(|| AdapterError::MissingField { path: walked.clone() })?;
    }
    Ok(current)
}

pub fn lookup_f64(root: &Value, prefix: &str, path: &[&str]) -> Result<f64, AdapterError> {
    lookup(root, prefix, path)?
        .as_f64()
        .ok_or_else(|| AdapterError::WrongType {
            path: join_path(prefix, path),
            expected: "a number",
        })
}

pub fn lookup_str<'a>(root: &'a Value, prefix: &str, path: &[&str]) -> Result<&'a str, AdapterError> {
    lookup(root, prefix, path)?
        .as_str()
        .ok_or_else(|| AdapterError::WrongType {
            path: join_path(prefix, path),
            expected: "a string",
        })
}

fn join_path(prefix: &str, path: &[&str]) -> String {
    let tail = path.join(".");
    if prefix.is_empty() {
        tail
    } else {
        format!("{}.{}", prefix, tail)
    }
}

/// `key=value` for a numeric reading, if perf-data is enabled.
pub fn numeric_perf_data(enabled: bool, key: &str, value: f64) -> Option<String> {
    enabled.then(|| format!("{}={}", key, format_number(value)))
}
