//! Fetch configuration
//!
//! Every knob of the pipeline lives here: where the catalog is, how many workers
//! split the result set, how long each worker pauses between requests, and how
//! long a single request may take. Values can be set with builders or taken
//! from `CATALOG_*` environment variables.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
pub const DEFAULT_WORKERS: usize = 2;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1;

pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
pub const ENV_WORKERS: &str = "CATALOG_WORKERS";
pub const ENV_DELAY_MS: &str = "CATALOG_DELAY_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CATALOG_HTTP_TIMEOUT_SECS";
pub const ENV_CHANNEL_CAPACITY: &str = "CATALOG_CHANNEL_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Catalog API root; `filter.php` and `lookup.php` are resolved against it.
    pub base_url: String,
    /// Number of concurrent detail workers (and therefore batches).
    pub workers: usize,
    /// Pause a worker takes after every item, so the catalog does not answer 429.
    pub delay: Duration,
    /// Upper bound for a single HTTP request, connect through body read.
    pub request_timeout: Duration,
    /// Buffer of the result channel. 1 keeps producers in lock-step with the consumer.
    pub channel_capacity: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            workers: DEFAULT_WORKERS,
            delay: DEFAULT_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay = d;
        self
    }

    pub fn with_request_timeout(mut self, t: Duration) -> Self {
        self.request_timeout = t;
        self
    }

    pub fn with_channel_capacity(mut self, c: usize) -> Self {
        self.channel_capacity = c;
        self
    }

    /// Defaults overridden by any `CATALOG_*` variables present in the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FetchConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            cfg.base_url = url;
        }
        if let Some(n) = parse_var::<usize, _>(&lookup, ENV_WORKERS)? {
            cfg.workers = n;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, ENV_DELAY_MS)? {
            cfg.delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, ENV_HTTP_TIMEOUT_SECS)? {
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(c) = parse_var::<usize, _>(&lookup, ENV_CHANNEL_CAPACITY)? {
            cfg.channel_capacity = c;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration_with_context(
                "at least one worker is required",
                ErrorContext::new().with_field_path("workers"),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(Error::configuration_with_context(
                "channel capacity must be at least 1",
                ErrorContext::new().with_field_path("channel_capacity"),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "request timeout must be non-zero",
                ErrorContext::new().with_field_path("request_timeout"),
            ));
        }
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::configuration_with_context(
                format!("unsupported URL scheme '{}'", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot parse {}: {}", key, e),
                ErrorContext::new().with_field_path(key).with_details(raw),
            )
        }),
    }
}
