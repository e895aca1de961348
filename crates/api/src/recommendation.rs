//! HTTP client for the downstream recommendation service.
//!
//! Two call shapes share one [`reqwest::Client`]: the proxied fetch, whose
//! JSON body is handed back unchanged, and the health probe, which only
//! needs a successful, non-empty answer within a short timeout.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::RecommendationConfig;

/// Errors from talking to the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Transport failure (connect, DNS, timeout) or an undecodable body.
    /// Rendered with its full source chain so the root cause reaches the client.
    #[error("{}", error_chain(.0))]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status code.
    #[error("upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// The service answered 2xx with no body.
    #[error("upstream returned an empty response")]
    EmptyBody,
}

/// `outer: cause: root cause`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// The recommendation dependency as seen by the order API.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch a recommendation; the JSON body is returned as received.
    async fn fetch(&self) -> Result<serde_json::Value, RecommendationError>;

    /// Reachability probe used by the health check.
    async fn probe(&self) -> Result<(), RecommendationError>;
}

/// [`RecommendationSource`] backed by HTTP.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
    probe_timeout: Duration,
}

impl RecommendationClient {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &RecommendationConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            timeout: config.timeout,
            probe_timeout: config.probe_timeout,
        }
    }

    async fn get(&self, timeout: Duration) -> Result<reqwest::Response, RecommendationError> {
        let response = self.client.get(&self.url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationError::HttpStatus(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn fetch(&self) -> Result<serde_json::Value, RecommendationError> {
        let response = self.get(self.timeout).await?;
        Ok(response.json().await?)
    }

    async fn probe(&self) -> Result<(), RecommendationError> {
        let response = self.get(self.probe_timeout).await?;
        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(RecommendationError::EmptyBody);
        }
        Ok(())
    }
}
