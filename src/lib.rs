// Public modules
pub mod types;
pub mod error;
pub mod cli;
pub mod config;
pub mod thresholds;
pub mod parsing;
pub mod fetcher;
pub mod metrics;
pub mod evaluator;
pub mod runner;
pub mod report;

// Re-export commonly used items
pub use types::*;
pub use error::{AdapterError, CheckError, FetchError};
pub use cli::Cli;
pub use config::load_config;
pub use thresholds::ThresholdTable;
pub use parsing::{parse_timestamp, parse_timestamp_str, age_seconds, ratio};
pub use fetcher::{Fetcher, HttpFetcher, MockFetcher};
pub use metrics::*;
pub use evaluator::{evaluate, evaluate_reading};
pub use runner::CheckRunner;
pub use report::CheckResult;
