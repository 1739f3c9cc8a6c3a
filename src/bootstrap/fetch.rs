//! The fetch capability injected into the bootstrap loader.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use thiserror::Error;
use tracing::debug;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport-level fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// For fetchers not backed by reqwest (tests, other hosts).
    #[error("{0}")]
    Other(String),
}

/// A raw response: status plus undecoded body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch capability supplied by the hosting framework.
/// The loader only issues GET-style requests through this seam.
#[async_trait]
pub trait StateFetcher: Send + Sync {
    /// Get issues a GET request for the given path and returns the raw
    /// response. Timeout behavior is whatever the implementation
    /// provides; the loader adds none of its own.
    async fn get(&self, path: &str) -> Result<FetchResponse, FetchError>;
}

/// Production fetcher backed by reqwest.
pub struct HttpFetcher {
    base_url: String,
    http_client: HttpClient,
}

impl HttpFetcher {
    /// Creates a fetcher targeting the given origin
    /// (e.g. "http://127.0.0.1:5000").
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl StateFetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, "sending request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}
