//! HTTP client for the remote content API.
//!
//! Dashboard records (books, events, preorders, form submissions) are
//! treated as opaque JSON and passed through without modeling.

use reqwest::{header, Client};
use serde_json::Value;
use tracing::debug;

use super::ContentError;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Clone is cheap: reqwest::Client shares its connection pool internally.
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one content collection (`forms`, `books`, `events`,
    /// `preorders`) as raw JSON. Responses are never cached.
    pub async fn fetch(&self, resource: &str) -> Result<Value, ContentError> {
        let url = format!("{}/api/{}", self.base_url.trim_end_matches('/'), resource);
        debug!("Fetching content from {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
