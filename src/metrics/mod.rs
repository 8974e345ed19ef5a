// Per-metric adapters: payload in, reading out
pub mod base;
pub mod cluster;
pub mod nodes;
pub mod indices;

// Re-export commonly used items
pub use cluster::analyze_cluster_health;
pub use nodes::{analyze_heap_used_percent, analyze_documents_count, analyze_search_query_time_ratio};
pub use indices::analyze_last_entry_age;
