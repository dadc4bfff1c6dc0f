//! # catalog-fetch
//!
//! 按过滤条件列出远程目录条目，并以有界并发抓取每个条目的详情。
//!
//! Lists items from a remote HTTP+JSON drinks catalog by filter, then fetches
//! the full record of every item with a fixed number of concurrent workers and
//! streams the records to a consumer as they arrive.
//!
//! ## Overview
//!
//! - **Static fan-out**: the listing is split into `workers` contiguous batches,
//!   one per worker, see [`batch::partition`]
//! - **Polite**: each worker has at most one request in flight and pauses after
//!   every item so the catalog does not start answering HTTP 429
//! - **Streaming**: records reach the consumer in arrival order through a
//!   [`pipeline::DetailStream`] that ends exactly once, after every worker stopped
//! - **Fault tolerant per item**: a failed detail lookup is logged and skipped,
//!   only a failed listing aborts the run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog_fetch::{DetailFetcher, FetchConfig, HttpCatalogClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> catalog_fetch::Result<()> {
//!     let config = FetchConfig::new();
//!     let client = Arc::new(HttpCatalogClient::new(&config)?);
//!     let fetcher = DetailFetcher::new(client, config)?;
//!
//!     let mut stream = fetcher.fetch("Gin").await?;
//!     while let Some(drink) = stream.recv().await {
//!         println!("{drink}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Worker count, politeness delay, timeouts, base URL |
//! | [`transport`] | [`CatalogSource`] trait and the HTTP client |
//! | [`types`] | Summary and detail records, wire envelope |
//! | [`batch`] | Static partitioning of a listing into batches |
//! | [`pipeline`] | Workers, result channel, consumer loops |

pub mod batch;
pub mod config;
pub mod pipeline;
pub mod transport;
pub mod types;

pub use config::FetchConfig;
pub use pipeline::{DetailFetcher, DetailStream};
pub use tokio_util::sync::CancellationToken;
pub use transport::{CatalogSource, HttpCatalogClient};
pub use types::{DetailItem, SummaryItem};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
