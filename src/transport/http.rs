use super::CatalogSource;
use crate::config::FetchConfig;
use crate::types::{DetailItem, DrinksEnvelope, SummaryItem};
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const FILTER_PATH: &str = "/filter.php";
pub const LOOKUP_PATH: &str = "/lookup.php";

/// Catalog client over HTTP GET + JSON.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_envelope<T>(&self, path: &str, key: &str, source: &str) -> Result<DrinksEnvelope<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, i = %key, "catalog request");

        let response = self
            .client
            .get(&url)
            .query(&[("i", key)])
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("request failed: {}", e),
                    ErrorContext::new().with_source(source).with_details(url.clone()),
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::network_with_context(
                format!("failed to read response body: {}", e),
                ErrorContext::new().with_source(source).with_details(url.clone()),
            )
        })?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: truncate(&body, 200),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn list_by_filter(&self, filter: &str) -> Result<Vec<SummaryItem>> {
        let envelope = self
            .get_envelope::<SummaryItem>(FILTER_PATH, filter, "catalog.list")
            .await?;
        Ok(envelope.into_items())
    }

    async fn get_detail(&self, id: &str) -> Result<DetailItem> {
        let envelope = self
            .get_envelope::<DetailItem>(LOOKUP_PATH, id, "catalog.lookup")
            .await?;
        Ok(envelope.into_first().unwrap_or_default())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
