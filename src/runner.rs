use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::CheckError;
use crate::evaluator::evaluate_reading;
use crate::fetcher::Fetcher;
use crate::metrics;
use crate::report::CheckResult;
use crate::thresholds::ThresholdTable;
use crate::types::*;

/// Runs the configured check: one fetch, one adapter, one evaluation.
pub struct CheckRunner<'a, F> {
    fetcher: &'a F,
    config: &'a Config,
    thresholds: &'a ThresholdTable,
    now: DateTime<Utc>,
}

impl<'a, F: Fetcher> CheckRunner<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a Config, thresholds: &'a ThresholdTable) -> Self {
        Self {
            fetcher,
            config,
            thresholds,
            now: Utc::now(),
        }
    }

    /// Pin the clock used for age checks.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Never fails: fetch and adapter errors become CRITICAL and UNKNOWN results.
    pub async fn run(&self) -> CheckResult {
        match self.try_run().await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "check failed");
                CheckResult::from_error(&e)
            }
        }
    }

    pub async fn try_run(&self) -> Result<CheckResult, CheckError> {
        let check = &self.config.check;
        let url = self.config.url_for(check);
        debug!(metric = %check.metric(), %url, "running check");

        let payload = self.fetcher.fetch(&url).await?;
        let perf = self.config.perf_data;
        let reading = match check {
            Check::ClusterHealth => metrics::analyze_cluster_health(&payload, self.thresholds, perf)?,
            Check::HeapUsedPercent => metrics::analyze_heap_used_percent(&payload, self.thresholds, perf)?,
            Check::DocumentsCount => metrics::analyze_documents_count(&payload, self.thresholds, perf)?,
            Check::SearchQueryTimeRatio => {
                metrics::analyze_search_query_time_ratio(&payload, self.thresholds, perf)?
            }
            Check::LastEntryAge {
                index,
                timestamp_field,
            } => metrics::analyze_last_entry_age(
                &payload,
                index,
                timestamp_field,
                self.now,
                self.thresholds,
                perf,
            )?,
        };

        Ok(evaluate_reading(reading, self.config.only_graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::MockFetcher;
    use chrono::TimeZone;
    use serde_json::json;

    fn config(check: Check) -> Config {
        Config {
            client_node: "es01".to_string(),
            node_name: "_local".to_string(),
            port: 9200,
            perf_data: false,
            only_graph: false,
            check,
        }
    }

    fn heap_stats(percent: i64) -> serde_json::Value {
        json!({"nodes": {"n1": {"jvm": {"mem": {"heap_used_percent": percent}}}}})
    }

    fn run(fetcher: &MockFetcher, config: &Config) -> CheckResult {
        let thresholds = ThresholdTable::defaults();
        tokio_test::block_on(CheckRunner::new(fetcher, config, &thresholds).run())
    }

    #[test]
    fn test_cluster_health_round_trip() {
        let fetcher = MockFetcher::new().with_response("http://es01:9200/_cluster/health", json!({"status": "green"}));
        let mut cfg = config(Check::ClusterHealth);
        cfg.perf_data = true;

        let result = run(&fetcher, &cfg);
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.line(), "OK - The cluster health status is green | cluster_status=2");
    }

    #[test]
    fn test_heap_levels() {
        let cfg = config(Check::HeapUsedPercent);
        for (percent, code) in [(95, 2), (80, 1), (10, 0)] {
            let fetcher = MockFetcher::new().with_response("http://es01:9200/_nodes/_local/stats", heap_stats(percent));
            assert_eq!(run(&fetcher, &cfg).exit_code(), code, "Failed for heap {}", percent);
        }
    }

    #[test]
    fn test_fetch_failure_is_critical() {
        let result = run(&MockFetcher::new(), &config(Check::ClusterHealth));
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.exit_code(), 2);
        assert!(result.line().contains("http://es01:9200/_cluster/health"));
    }

    #[test]
    fn test_fetch_failure_is_critical_even_in_only_graph_mode() {
        let mut cfg = config(Check::HeapUsedPercent);
        cfg.only_graph = true;
        let result = run(&MockFetcher::new(), &cfg);
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn test_adapter_failure_is_unknown() {
        let fetcher = MockFetcher::new().with_response("http://es01:9200/_nodes/_local/stats", json!({"nodes": {}}));
        let result = run(&fetcher, &config(Check::DocumentsCount));
        assert_eq!(result.exit_code(), 3);
        assert_eq!(result.line(), "UNKNOWN - no node matched in node stats response");
    }

    #[test]
    fn test_zero_queries_is_unknown() {
        let stats = json!({"nodes": {"n1": {"indices": {"search": {"query_time_in_millis": 50, "query_total": 0}}}}});
        let fetcher = MockFetcher::new().with_response("http://es01:9200/_nodes/_local/stats", stats);
        let result = run(&fetcher, &config(Check::SearchQueryTimeRatio));
        assert_eq!(result.severity, Severity::Unknown);
        assert!(result.message.contains("undefined"));
    }

    #[test]
    fn test_only_graph() {
        let fetcher = MockFetcher::new().with_response("http://es01:9200/_nodes/_local/stats", heap_stats(99));
        let mut cfg = config(Check::HeapUsedPercent);
        cfg.only_graph = true;
        cfg.perf_data = true;

        let result = run(&fetcher, &cfg);
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.line(), "The Heap used percent is 99% | heap_used_percent=99");
    }

    #[test]
    fn test_last_entry_age_uses_pinned_clock() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let body = json!({"hits": {"hits": [{"_source": {"ts": "2024-03-01T11:58:00Z"}}]}});
        let fetcher = MockFetcher::new().with_response("http://es01:9200/logs/_search?size=1&sort=ts:desc", body);
        let cfg = config(Check::LastEntryAge {
            index: "logs".into(),
            timestamp_field: "ts".into(),
        });
        let thresholds = ThresholdTable::defaults();

        let result = tokio_test::block_on(CheckRunner::new(&fetcher, &cfg, &thresholds).at(now).run());
        assert_eq!(result.line(), "OK - The last entry in logs is 120s old");
    }
}
