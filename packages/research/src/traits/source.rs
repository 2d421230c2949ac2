//! Pluggable source acquisition.
//!
//! Both entry points run the same pipeline; they differ only in where the
//! candidate sources come from:
//! - `UrlListSource` - a user-supplied `urls.txt`, fetched page by page
//! - `SearchSource` - search-engine results fetched by a browser

use async_trait::async_trait;

use crate::error::{FetchResult, Result};
use crate::run_log::RunLogger;
use crate::types::{article::Candidate, keyword::Keyword, workspace::Workspace};

/// What a strategy hands back for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContent {
    /// Raw markup that still needs extraction
    Markup(String),

    /// Visible text already extracted upstream
    Text(String),
}

/// The run state a strategy may read.
pub struct SourceContext<'a> {
    pub keyword: &'a Keyword,
    pub workspace: &'a Workspace,
    pub log: &'a RunLogger,
}

#[async_trait]
pub trait SourceStrategy: Send + Sync {
    /// Resolve the ordered candidate list for this run.
    ///
    /// An `Err` is a precondition failure and halts the run.
    async fn candidates(&self, ctx: &SourceContext<'_>) -> Result<Vec<Candidate>>;

    /// Obtain the content of one candidate. Errors skip that candidate only.
    async fn retrieve(&self, candidate: &Candidate) -> FetchResult<SourceContent>;

    fn name(&self) -> &str {
        "unknown"
    }
}
