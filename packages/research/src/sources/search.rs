//! Sources from search-engine results.

use async_trait::async_trait;
use tracing::warn;

use crate::error::{FetchError, FetchResult, Result};
use crate::traits::searcher::Searcher;
use crate::traits::source::{SourceContent, SourceContext, SourceStrategy};
use crate::types::article::Candidate;

/// Runs a `Searcher` once and hands its pages to the pipeline.
///
/// A searcher failure is logged and yields no candidates; the run goes on
/// to analysis with whatever the workspace already holds.
pub struct SearchSource<S: Searcher> {
    searcher: S,
}

impl<S: Searcher> SearchSource<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }
}

#[async_trait]
impl<S: Searcher> SourceStrategy for SearchSource<S> {
    async fn candidates(&self, ctx: &SourceContext<'_>) -> Result<Vec<Candidate>> {
        match self
            .searcher
            .search_and_fetch(ctx.keyword, ctx.workspace, ctx.log)
            .await
        {
            Ok(hits) => Ok(hits
                .into_iter()
                .map(|hit| {
                    Candidate::new(hit.position, hit.url)
                        .with_title(hit.title)
                        .with_prefetched(hit.text)
                })
                .collect()),
            Err(e) => {
                warn!(searcher = self.searcher.name(), error = %e, "Search failed");
                ctx.log.log(format!("❌ Search failed: {e}"));
                Ok(Vec::new())
            }
        }
    }

    async fn retrieve(&self, candidate: &Candidate) -> FetchResult<SourceContent> {
        candidate
            .prefetched
            .clone()
            .map(SourceContent::Text)
            .ok_or_else(|| FetchError::Decode(format!("no text captured for {}", candidate.url)))
    }

    fn name(&self) -> &str {
        "search"
    }
}
