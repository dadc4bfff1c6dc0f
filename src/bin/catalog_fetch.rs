//! catalog-fetch: 按配料列出鸡尾酒并并发抓取详情
//!
//! Usage:
//!   catalog-fetch [FILTER]        List drinks containing FILTER (default: Gin) and print their details
//!   catalog-fetch --help
//!   catalog-fetch --version

use catalog_fetch::pipeline::write_details;
use catalog_fetch::{CancellationToken, DetailFetcher, FetchConfig, HttpCatalogClient};
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_FILTER: &str = "Gin";

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    let filter = match args.get(1).map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_usage();
            return;
        }
        Some("version" | "--version" | "-V") => {
            println!("catalog-fetch {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(other) if other.starts_with('-') => {
            eprintln!("Unknown option: {other}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
        Some(filter) => filter.to_string(),
        None => DEFAULT_FILTER.to_string(),
    };

    init_tracing();

    if let Err(e) = run(&filter).await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"catalog-fetch: list catalog items by filter and fetch their details concurrently

USAGE:
    catalog-fetch [FILTER]

ARGS:
    FILTER                      Ingredient to filter by (default: {DEFAULT_FILTER})

ENVIRONMENT:
    CATALOG_BASE_URL            Catalog API root
    CATALOG_WORKERS             Number of concurrent workers (default: 2)
    CATALOG_DELAY_MS            Pause after each request per worker (default: 200)
    CATALOG_HTTP_TIMEOUT_SECS   Per-request timeout (default: 30)
    CATALOG_CHANNEL_CAPACITY    Result channel buffer (default: 1)
    RUST_LOG                    Log filter (default: info)"#
    );
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(filter: &str) -> catalog_fetch::Result<()> {
    let config = FetchConfig::from_env()?;
    let client = Arc::new(HttpCatalogClient::new(&config)?);

    let token = CancellationToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted, stopping workers");
            on_interrupt.cancel();
        }
    });

    let fetcher = DetailFetcher::new(client, config)?.with_cancellation(token);
    let stream = fetcher.fetch(filter).await?;

    let mut stdout = std::io::stdout();
    let printed = write_details(stream, &mut stdout).await?;
    info!(filter, printed, "done");
    Ok(())
}
