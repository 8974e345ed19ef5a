use anyhow::{anyhow, bail, Context, Result};

use crate::cli::{Cli, Command};
use crate::types::{Check, Config};

pub const DEFAULT_PORT: u16 = 9200;

/// Validate parsed arguments and resolve the one check to run.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let client_node = cli.client_node.trim().to_string();
    validate_host(&client_node).context("Invalid --client-node")?;

    let node_name = cli.node_name.trim().to_string();
    if node_name.is_empty() {
        bail!("--node-name must not be empty");
    }
    if cli.port == 0 {
        bail!("--port must be between 1 and 65535");
    }

    let check = select_check(&cli.command)?;

    Ok(Config {
        client_node,
        node_name,
        port: cli.port,
        perf_data: cli.perf_data,
        only_graph: cli.only_graph,
        check,
    })
}

fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(anyhow!("host must not be empty"));
    }
    if host.contains("://") {
        return Err(anyhow!("`{}` must be a host name, not a URL", host));
    }
    if host.contains(|c: char| c == '/' || c.is_whitespace()) {
        return Err(anyhow!("`{}` is not a valid host name", host));
    }
    Ok(())
}

fn select_check(command: &Command) -> Result<Check> {
    match command {
        Command::Cluster(args) if args.cluster_health => Ok(Check::ClusterHealth),
        Command::Cluster(_) => Err(anyhow!("no cluster check selected (use --cluster-health)")),
        Command::Node(args) => {
            if args.heap_used_percent {
                Ok(Check::HeapUsedPercent)
            } else if args.documents_count {
                Ok(Check::DocumentsCount)
            } else if args.ratio_search_query_time {
                Ok(Check::SearchQueryTimeRatio)
            } else {
                Err(anyhow!(
                    "no node check selected (use --heap-used-percent, --documents-count or --ratio-search-query-time)"
                ))
            }
        }
        Command::Indices(args) => {
            if !args.last_entry_age {
                bail!("no indices check selected (use --last-entry-age)");
            }
            let index = args.index.trim();
            let timestamp_field = args.timestamp_field.trim();
            if index.is_empty() || index.contains(|c: char| c == '/' || c.is_whitespace()) {
                bail!("Invalid --index `{}`", args.index);
            }
            if timestamp_field.is_empty() {
                bail!("--timestamp-field must not be empty");
            }
            Ok(Check::LastEntryAge {
                index: index.to_string(),
                timestamp_field: timestamp_field.to_string(),
            })
        }
    }
}

impl Config {
    fn base_url(&self) -> String {
        format!("http://{}:{}", self.client_node, self.port)
    }

    pub fn cluster_health_url(&self) -> String {
        format!("{}/_cluster/health", self.base_url())
    }

    pub fn node_stats_url(&self) -> String {
        format!("{}/_nodes/{}/stats", self.base_url(), self.node_name)
    }

    pub fn last_entry_url(&self, index: &str, timestamp_field: &str) -> String {
        format!(
            "{}/{}/_search?size=1&sort={}:desc",
            self.base_url(),
            index,
            timestamp_field
        )
    }

    /// Endpoint queried by the configured check.
    pub fn url_for(&self, check: &Check) -> String {
        match check {
            Check::ClusterHealth => self.cluster_health_url(),
            Check::HeapUsedPercent | Check::DocumentsCount | Check::SearchQueryTimeRatio => {
                self.node_stats_url()
            }
            Check::LastEntryAge {
                index,
                timestamp_field,
            } => self.last_entry_url(index, timestamp_field),
        }
    }
}
