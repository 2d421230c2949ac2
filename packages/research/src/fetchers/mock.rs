//! Mock fetcher and searcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::run_log::RunLogger;
use crate::traits::fetcher::{FetchedPage, PageFetcher};
use crate::traits::searcher::{SearchHit, Searcher};
use crate::types::{keyword::Keyword, workspace::Workspace};

#[derive(Debug, Clone)]
enum CannedResponse {
    Page(String),
    Status(u16),
    Timeout,
}

/// Fetcher with canned responses per URL.
///
/// Unknown URLs answer with HTTP 404.
///
/// ```rust
/// use research::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("https://example.com/a", "<p>hello</p>")
///     .with_status("https://example.com/b", 500);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Page(body.into()));
    }

    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Status(status));
        self
    }

    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), CannedResponse::Timeout);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(CannedResponse::Page(body)) => {
                Ok(FetchedPage::new(url, body).with_content_type("text/html"))
            }
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(CannedResponse::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Searcher returning canned hits, or a canned failure.
#[derive(Default, Clone)]
pub struct MockSearcher {
    hits: Vec<SearchHit>,
    failure: Option<String>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit(mut self, hit: SearchHit) -> Self {
        self.hits.push(hit);
        self
    }

    /// Make every search fail as if the subprocess could not start.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Keywords searched so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    async fn search_and_fetch(
        &self,
        keyword: &Keyword,
        _workspace: &Workspace,
        log: &RunLogger,
    ) -> FetchResult<Vec<SearchHit>> {
        self.calls.write().unwrap().push(keyword.to_string());

        if let Some(message) = &self.failure {
            return Err(FetchError::Subprocess(message.clone()));
        }

        log.log(format!("📄 {} search results persisted", self.hits.len()));
        Ok(self.hits.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetch_responses() {
        let mock = MockFetcher::new()
            .with_page("https://example.com/a", "Page A")
            .with_status("https://example.com/b", 500)
            .with_timeout("https://example.com/c");

        let page = mock.fetch("https://example.com/a").await.unwrap();
        assert_eq!(page.body, "Page A");

        assert!(matches!(
            mock.fetch("https://example.com/b").await,
            Err(FetchError::Status { status: 500, .. })
        ));
        assert!(matches!(
            mock.fetch("https://example.com/c").await,
            Err(FetchError::Timeout { .. })
        ));
        assert!(matches!(
            mock.fetch("https://example.com/missing").await,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_call_tracking() {
        let mock = MockFetcher::new();
        let _ = mock.fetch("https://example.com/1").await;
        let _ = mock.fetch("https://example.com/2").await;

        assert_eq!(mock.call_count(), 2);
        assert_eq!(
            mock.calls(),
            vec![
                "https://example.com/1".to_string(),
                "https://example.com/2".to_string(),
            ]
        );
    }
}
