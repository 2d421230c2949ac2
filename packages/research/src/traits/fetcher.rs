//! Page fetcher trait: "give me the markup behind this URL".
//!
//! The pipeline never talks to the network directly. Implementations:
//! - `HttpFetcher` - plain HTTP GET via reqwest
//! - `MockFetcher` - canned responses for tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// Raw page body returned by a fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Requested URL
    pub url: String,

    /// Raw body (HTML or plain text)
    pub body: String,

    /// MIME type if the server declared one
    pub content_type: Option<String>,

    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            content_type: None,
            fetched_at: Utc::now(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Body length in bytes.
    pub fn body_length(&self) -> usize {
        self.body.len()
    }
}

/// Fetch one page. Any non-200 answer is an error.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for Box<F> {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
