//! 批处理模块：把有序结果集静态切分为固定数量的连续批次。
//!
//! # Batch Partitioning
//!
//! The fetch pipeline hands each worker one contiguous slice of the listing.
//! [`partition`] performs that split:
//!
//! - `batch_size = ceil(len / workers)`
//! - exactly `workers` batches, batch `i` covering `[i * size, min((i + 1) * size, len))`
//! - trailing batches are empty when there are fewer items than workers
//!
//! The split is static; there is no work stealing or rebalancing.
//!
//! ```rust
//! use catalog_fetch::batch::partition;
//!
//! let batches = partition(vec!["1", "2", "3", "4", "5"], 2);
//! assert_eq!(batches[0].items, vec!["1", "2", "3"]);
//! assert_eq!(batches[1].items, vec!["4", "5"]);
//! ```

mod partition;

pub use partition::{batch_size, partition, Batch};
