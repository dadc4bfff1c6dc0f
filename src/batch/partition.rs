//! Static, size-based partitioning.

/// A contiguous run of items owned by a single worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    /// Position of this batch (and of the worker that owns it).
    pub index: usize,
    pub items: Vec<T>,
}

impl<T> Batch<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(len / workers)`, or 0 when there are no workers.
pub fn batch_size(len: usize, workers: usize) -> usize {
    if workers == 0 {
        return 0;
    }
    len.div_ceil(workers)
}

/// Split `items` into exactly `workers` contiguous batches, preserving order.
///
/// Every item lands in exactly one batch. `workers == 0` yields no batches.
pub fn partition<T>(items: Vec<T>, workers: usize) -> Vec<Batch<T>> {
    let size = batch_size(items.len(), workers);
    let mut rest = items.into_iter();

    (0..workers)
        .map(|index| Batch {
            index,
            items: rest.by_ref().take(size).collect(),
        })
        .collect()
}
