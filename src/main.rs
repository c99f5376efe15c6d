use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_query::config::{AppConfig, CliArgs};
use order_query::{Order, OrderMatcher, OrderStore, OrdersQuery, QueryMetrics};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchedOrder<'a> {
    #[serde(flatten)]
    order: &'a Order,
    total_price: f64,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    let config = AppConfig::from(&args);

    // RUST_LOG wins over --log-filter / ORDER_QUERY_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let store = match &config.dataset_path {
        Some(path) => OrderStore::from_json_file(path)?,
        None => OrderStore::bundled().context("Bundled order dataset is invalid")?,
    };

    let metrics = Arc::new(QueryMetrics::new()?);
    let matcher = OrderMatcher::new(store).with_metrics(metrics.clone());

    let raw_query = read_query(args.query.as_deref())?;
    let query: OrdersQuery = serde_json::from_str(&raw_query).context("Query is not valid JSON")?;

    let exit = match matcher.find_orders(&query) {
        Ok(orders) => {
            let output: Vec<_> = orders
                .into_iter()
                .map(|order| MatchedOrder {
                    order,
                    total_price: order.total_price(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("invalid query ({}): {}", error.kind(), error);
            ExitCode::from(2)
        }
    };

    if config.print_metrics {
        eprint!("{}", metrics.render()?);
    }

    Ok(exit)
}

fn read_query(arg: Option<&str>) -> anyhow::Result<String> {
    match arg {
        Some(query) if query != "-" => Ok(query.to_string()),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read query from stdin")?;
            Ok(buffer)
        }
    }
}
