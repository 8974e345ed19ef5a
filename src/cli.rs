use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_PORT;

/// Elasticsearch Nagios checks
#[derive(Parser, Debug)]
#[command(name = "check-elasticsearch")]
#[command(version)]
#[command(about = "Elasticsearch Nagios checks", long_about = None)]
pub struct Cli {
    /// Node name in the Cluster
    #[arg(short = 'n', long, default_value = "_local", global = true)]
    pub node_name: String,

    /// Client node name (FQDN) for HTTP communication
    #[arg(short = 'c', long, default_value = "localhost", global = true)]
    pub client_node: String,

    /// HTTP port of the client node
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Enable Nagios performance data (valid for all check groups)
    #[arg(short = 'D', long, global = true)]
    pub perf_data: bool,

    /// Print only the message, never alert
    #[arg(short = 'G', long, global = true)]
    pub only_graph: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// All Cluster checks
    Cluster(ClusterArgs),
    /// All Node checks
    Node(NodeArgs),
    /// All Indices checks
    Indices(IndicesArgs),
}

#[derive(Args, Debug)]
pub struct ClusterArgs {
    /// Check the Cluster health (green, yellow, red)
    #[arg(long)]
    pub cluster_health: bool,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct NodeArgs {
    /// Check the Heap used percent
    #[arg(long)]
    pub heap_used_percent: bool,

    /// Check the number of documents held by the node
    #[arg(long)]
    pub documents_count: bool,

    /// Check the average search query time (ms per query)
    #[arg(long)]
    pub ratio_search_query_time: bool,
}

#[derive(Args, Debug)]
pub struct IndicesArgs {
    /// Check how old the newest document in the index is
    #[arg(long)]
    pub last_entry_age: bool,

    /// Index (or pattern) to search
    #[arg(short, long, default_value = "_all")]
    pub index: String,

    /// Date field that orders the entries
    #[arg(short, long, default_value = "@timestamp")]
    pub timestamp_field: String,
}
