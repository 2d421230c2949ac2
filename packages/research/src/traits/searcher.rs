//! Search-and-fetch capability.
//!
//! One call performs a search-engine query for the keyword and returns the
//! text of the top result pages, in result order. The pipeline depends only
//! on this trait; `BrowserSearch` shells out to a headless browser to
//! implement it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;
use crate::run_log::RunLogger;
use crate::types::{keyword::Keyword, workspace::Workspace};

/// One search result together with the text extracted from its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based rank among the kept results
    pub position: usize,

    pub title: String,

    pub url: String,

    /// Visible text of the result page (may be empty if extraction failed)
    #[serde(default)]
    pub text: String,
}

impl SearchHit {
    pub fn new(position: usize, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            url: url.into(),
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[async_trait]
pub trait Searcher: Send + Sync {
    /// Search for `keyword` and fetch the result pages.
    ///
    /// Diagnostics from the external tool are written to `log`.
    async fn search_and_fetch(
        &self,
        keyword: &Keyword,
        workspace: &Workspace,
        log: &RunLogger,
    ) -> FetchResult<Vec<SearchHit>>;

    fn name(&self) -> &str {
        "unknown"
    }
}
