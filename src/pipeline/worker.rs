//! Detail worker: one batch, one request at a time.

use super::channel::Publisher;
use crate::batch::Batch;
use crate::transport::CatalogSource;
use crate::types::SummaryItem;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// What a worker did with its batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub delivered: usize,
    pub failed: usize,
    /// Stopped before the batch was exhausted (cancelled or consumer gone).
    pub stopped_early: bool,
}

impl WorkerOutcome {
    pub(crate) fn absorb(&mut self, other: &WorkerOutcome) {
        self.delivered += other.delivered;
        self.failed += other.failed;
        self.stopped_early |= other.stopped_early;
    }
}

pub(crate) struct DetailWorker {
    pub(crate) source: Arc<dyn CatalogSource>,
    pub(crate) publisher: Publisher,
    pub(crate) delay: Duration,
    pub(crate) cancel: CancellationToken,
}

impl DetailWorker {
    /// Walk the batch in order: lookup, publish, pause.
    ///
    /// A failed lookup is logged and skipped. The pause follows every item,
    /// the last one and failed lookups included.
    pub(crate) async fn run(self, batch: Batch<SummaryItem>) -> WorkerOutcome {
        let worker = batch.index;
        let total = batch.len();
        let mut outcome = WorkerOutcome::default();
        debug!(worker, items = total, "worker started");

        for (position, item) in batch.items.into_iter().enumerate() {
            let lookup = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    outcome.stopped_early = true;
                    break;
                }
                r = self.source.get_detail(&item.id) => r,
            };

            match lookup {
                Ok(detail) => {
                    if detail.is_empty() {
                        debug!(worker, id = %item.id, "lookup matched no record");
                    }
                    let sent = tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => {
                            outcome.stopped_early = true;
                            break;
                        }
                        r = self.publisher.publish(detail) => r,
                    };
                    if sent.is_err() {
                        debug!(worker, "result stream dropped, stopping");
                        outcome.stopped_early = true;
                        break;
                    }
                    outcome.delivered += 1;
                }
                Err(e) => {
                    warn!(worker, id = %item.id, error = %e, "failed to fetch item detail, skipping");
                    outcome.failed += 1;
                }
            }

            // Failed lookups pause too.
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    outcome.stopped_early = position + 1 < total;
                    break;
                }
                _ = tokio::time::sleep(self.delay) => {}
            }
        }

        info!(
            worker,
            items = total,
            delivered = outcome.delivered,
            failed = outcome.failed,
            stopped_early = outcome.stopped_early,
            "worker finished"
        );
        outcome
    }
}
