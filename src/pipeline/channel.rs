//! Result channel: many publishing workers, one consuming stream.

use super::worker::WorkerOutcome;
use crate::types::DetailItem;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

/// Consumer side has gone away; the item was not delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("result stream dropped by consumer")]
pub struct ConsumerGone(pub DetailItem);

/// Worker-side handle for publishing detail records.
#[derive(Debug, Clone)]
pub struct Publisher {
    sender: mpsc::Sender<DetailItem>,
}

impl Publisher {
    /// Wait until the channel has room, then hand `item` over.
    pub async fn publish(&self, item: DetailItem) -> std::result::Result<(), ConsumerGone> {
        self.sender
            .send(item)
            .await
            .map_err(|mpsc::error::SendError(item)| ConsumerGone(item))
    }
}

/// A bounded mpsc channel whose close is owned by a coordinator task.
///
/// Workers only ever hold [`Publisher`] clones. The original sender stays with
/// the coordinator spawned by [`ResultChannel::close_after`], which drops it
/// once the worker set is empty. The stream therefore ends exactly once, after
/// every worker has finished publishing.
pub struct ResultChannel {
    sender: mpsc::Sender<DetailItem>,
    receiver: mpsc::Receiver<DetailItem>,
}

impl ResultChannel {
    /// `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        Self { sender, receiver }
    }

    pub fn publisher(&self) -> Publisher {
        Publisher {
            sender: self.sender.clone(),
        }
    }

    /// Spawn the coordinator and return the consuming end.
    ///
    /// `workers` must already hold every worker task. The coordinator joins
    /// them all, logs the totals and then closes the channel. A worker that
    /// panicked counts as finished.
    pub(crate) fn close_after(self, mut workers: JoinSet<WorkerOutcome>) -> DetailStream {
        let ResultChannel { sender, receiver } = self;
        let closer = tokio::spawn(async move {
            let mut totals = WorkerOutcome::default();
            let mut finished = 0usize;
            while let Some(joined) = workers.join_next().await {
                finished += 1;
                match joined {
                    Ok(outcome) => totals.absorb(&outcome),
                    Err(e) => warn!(error = %e, "worker task did not complete"),
                }
            }
            drop(sender);
            debug!("all workers finished, result channel closed");
            info!(
                workers = finished,
                delivered = totals.delivered,
                failed = totals.failed,
                stopped_early = totals.stopped_early,
                "fetch finished"
            );
            totals
        });
        DetailStream { receiver, closer }
    }
}

/// Arrival-ordered stream of fetched details.
///
/// Yields `None` once the channel is closed and drained; that happens exactly
/// once, after every worker has stopped.
pub struct DetailStream {
    receiver: mpsc::Receiver<DetailItem>,
    closer: JoinHandle<WorkerOutcome>,
}

impl DetailStream {
    /// Next record in arrival order, or `None` when all workers are done.
    pub async fn recv(&mut self) -> Option<DetailItem> {
        self.receiver.recv().await
    }

    /// True once the coordinator has closed the channel.
    pub fn is_closed(&self) -> bool {
        self.closer.is_finished()
    }
}

impl Stream for DetailStream {
    type Item = DetailItem;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
