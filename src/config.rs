use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "info,order_query=debug";

// ============================================================================
// Application Configuration
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Order dataset to load; `None` uses the bundled sample orders
    pub dataset_path: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Print Prometheus metrics to stderr after the query
    pub print_metrics: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            print_metrics: false,
        }
    }
}

/// Filter orders by search text, user ids, item count and total price
#[derive(Parser, Debug)]
#[command(name = "order_query", version)]
pub struct CliArgs {
    /// Query as JSON, e.g. '{"search":"desk","totalPrice":{"lt":500}}'.
    /// Reads stdin when omitted or "-"
    pub query: Option<String>,

    /// JSON file containing an array of orders
    #[arg(long, env = "ORDER_QUERY_DATASET")]
    pub dataset: Option<PathBuf>,

    #[arg(long, env = "ORDER_QUERY_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    #[arg(long, env = "ORDER_QUERY_METRICS")]
    pub metrics: bool,
}

impl From<&CliArgs> for AppConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            dataset_path: args.dataset.clone(),
            log_filter: args.log_filter.clone(),
            print_metrics: args.metrics,
        }
    }
}
