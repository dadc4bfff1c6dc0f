//! 流水线模块：有界扇出的详情抓取流水线。
//!
//! # Detail Fetch Pipeline
//!
//! Turns one catalog listing into a stream of full records:
//!
//! ```text
//! list_by_filter ─▶ partition ─▶ worker 0 ─┐
//!                             ├▶ worker 1 ─┼─▶ ResultChannel ─▶ DetailStream ─▶ consumer
//!                             └▶ worker N ─┘        ▲
//!                                                   └── coordinator closes after the JoinSet drains
//! ```
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`DetailFetcher`] | Entry point: listing, partitioning, spawning |
//! | `JoinSet` | Running workers; the coordinator joins them and sums their outcomes |
//! | `ResultChannel` | Multi-producer channel closed by a coordinator |
//! | [`DetailStream`] | Arrival-ordered consumer side |
//! | [`drain`] / [`write_details`] | Consumer loops |
//!
//! Within a worker, records arrive in batch order. Across workers there is no
//! ordering. The stream ends only after every worker has stopped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use catalog_fetch::pipeline::{drain, DetailFetcher};
//! use catalog_fetch::{FetchConfig, HttpCatalogClient};
//! use std::sync::Arc;
//!
//! # async fn run() -> catalog_fetch::Result<()> {
//! let config = FetchConfig::from_env()?;
//! let client = Arc::new(HttpCatalogClient::new(&config)?);
//! let fetcher = DetailFetcher::new(client, config)?;
//!
//! let stream = fetcher.fetch("Gin").await?;
//! let count = drain(stream, |item| println!("{}", item.name)).await;
//! println!("{count} drinks");
//! # Ok(())
//! # }
//! ```

mod channel;
mod consumer;
mod worker;


pub use channel::DetailStream;
pub use consumer::{drain, render_detail, write_details};

pub(crate) use channel::ResultChannel;

use crate::batch::partition;
use crate::config::FetchConfig;
use crate::transport::CatalogSource;
use crate::types::SummaryItem;
use crate::{Error, Result};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::info;
use worker::DetailWorker;

/// Fixed fan-out of detail lookups over a [`CatalogSource`].
pub struct DetailFetcher {
    source: Arc<dyn CatalogSource>,
    config: FetchConfig,
    cancel: CancellationToken,
}

impl DetailFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, config: FetchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            cancel: CancellationToken::new(),
        })
    }

    /// Use `token` to stop the listing and all workers early.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// List items matching `filter`, then stream their details.
    ///
    /// A failed listing is returned as the error; nothing is spawned in that
    /// case. Individual detail failures are logged and skipped by the workers.
    pub async fn fetch(&self, filter: &str) -> Result<DetailStream> {
        let items = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(Error::Cancelled),
            r = self.source.list_by_filter(filter) => r?,
        };
        info!(filter, items = items.len(), workers = self.config.workers, "catalog listing fetched");
        Ok(self.spawn(items))
    }

    /// Partition `items` across the workers and start them.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, items: Vec<SummaryItem>) -> DetailStream {
        let channel = ResultChannel::new(self.config.channel_capacity);
        let mut workers = JoinSet::new();

        for batch in partition(items, self.config.workers) {
            let worker = DetailWorker {
                source: Arc::clone(&self.source),
                publisher: channel.publisher(),
                delay: self.config.delay,
                cancel: self.cancel.clone(),
            };
            workers.spawn(worker.run(batch));
        }

        channel.close_after(workers)
    }
}
