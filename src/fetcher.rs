use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Source of JSON documents, one GET per call.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// Production implementation over HTTP. No timeout or retry: the supervisor
/// owns both.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url, "fetching");
        let fail = |e: reqwest::Error| {
            warn!(url, error = %e, "fetch failed");
            FetchError::new(url, e)
        };
        let res = self.client.get(url).send().await.map_err(fail)?;
        let res = res.error_for_status().map_err(fail)?;
        res.json::<Value>().await.map_err(fail)
    }
}

/// In-memory implementation for testing; unknown URLs fail like an
/// unreachable host.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Value>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_response<U>(mut self, url: U, body: Value) -> Self
    where
        U: Into<String>,
    {
        self.responses.insert(url.into(), body);
        self
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::new(url, "no mock response registered"))
    }
}
