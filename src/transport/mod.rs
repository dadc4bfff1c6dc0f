//! 传输模块：目录服务的查询接口及其 HTTP 实现。
//!
//! # Catalog Transport
//!
//! [`CatalogSource`] is the seam between the fetch pipeline and the remote
//! catalog. [`HttpCatalogClient`] talks to the real HTTP+JSON service; tests
//! and embedders can plug in any other implementation.

mod http;

pub use http::{HttpCatalogClient, FILTER_PATH, LOOKUP_PATH};

use crate::types::{DetailItem, SummaryItem};
use crate::Result;

/// The two lookups the pipeline needs from a catalog.
///
/// Each call is one outbound request: no caching, no retries.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// All items matching `filter`. An empty listing is `Ok(vec![])`.
    async fn list_by_filter(&self, filter: &str) -> Result<Vec<SummaryItem>>;

    /// Full record for `id`. When the catalog knows no such id the result is
    /// `DetailItem::default()`, not an error.
    async fn get_detail(&self, id: &str) -> Result<DetailItem>;
}
