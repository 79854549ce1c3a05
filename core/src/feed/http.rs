//! HTTP Feed Source
//!
//! A single unauthenticated GET against the configured base URL. The
//! client carries a generous request timeout so a wedged server cannot
//! hold a refresh task forever; there is deliberately no retry, no
//! backoff, and no request cancellation — a late response simply loses
//! to whichever refresh resolves after it.

use std::time::Duration;

use async_trait::async_trait;

use super::{Feed, FeedError, FeedSource};

/// Request timeout for one fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The production feed source: GET `base_url`, decode JSON object.
#[derive(Clone, Debug)]
pub struct HttpFeed {
    base_url: String,
    http: reqwest::Client,
}

impl HttpFeed {
    /// Create a source for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// The endpoint this source polls.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Feed, FeedError> {
        let value: serde_json::Value = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match value {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(FeedError::MalformedFeed),
        }
    }
}
