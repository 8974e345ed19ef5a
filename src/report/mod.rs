use crate::error::CheckError;
use crate::types::Severity;

/// Outcome of one check: printed once, then turned into the exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
    pub perf_data: Option<String>,
}

impl CheckResult {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            perf_data: None,
        }
    }

    pub fn with_perf_data(mut self, perf_data: Option<String>) -> Self {
        self.perf_data = perf_data;
        self
    }

    pub fn from_error(err: &CheckError) -> Self {
        Self::new(err.severity(), err.to_string())
    }

    /// Message plus the ` | key=value` suffix when there is one.
    pub fn text(&self) -> String {
        match &self.perf_data {
            Some(perf) => format!("{} | {}", self.message, perf),
            None => self.message.clone(),
        }
    }

    /// The one stdout line for the supervisor.
    pub fn line(&self) -> String {
        match self.severity {
            Severity::Info => self.text(),
            severity => format!("{} - {}", severity, self.text()),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}
