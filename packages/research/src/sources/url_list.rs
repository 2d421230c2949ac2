//! Sources from a user-supplied URL list.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{FetchResult, ResearchError, Result};
use crate::traits::fetcher::PageFetcher;
use crate::traits::source::{SourceContent, SourceContext, SourceStrategy};
use crate::types::{article::Candidate, config::MAX_SOURCES};

/// Reads `urls.txt` (one URL per line) and fetches each with a
/// `PageFetcher`. A missing file is a precondition failure.
pub struct UrlListSource<F: PageFetcher> {
    urls_file: PathBuf,
    fetcher: F,
}

impl<F: PageFetcher> UrlListSource<F> {
    pub fn new(urls_file: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            urls_file: urls_file.into(),
            fetcher,
        }
    }

    pub fn urls_file(&self) -> &Path {
        &self.urls_file
    }
}

/// Non-blank, trimmed lines in file order.
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl<F: PageFetcher> SourceStrategy for UrlListSource<F> {
    async fn candidates(&self, ctx: &SourceContext<'_>) -> Result<Vec<Candidate>> {
        let path = &self.urls_file;

        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            ctx.log.log(format!("❌ File not found: {}", path.display()));
            ctx.log.log("Create it in the current directory with one URL per line");
            return Err(ResearchError::InputNotFound { path: path.clone() });
        }

        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(source) => {
                ctx.log.log(format!("❌ Cannot read {}: {source}", path.display()));
                return Err(ResearchError::InputUnreadable {
                    path: path.clone(),
                    source,
                });
            }
        };

        let urls = parse_url_list(&contents);
        ctx.log.log(format!("📄 Found {} URLs", urls.len()));
        if urls.len() > MAX_SOURCES {
            ctx.log.log(format!("Processing the first {MAX_SOURCES} only"));
        }
        info!(file = %path.display(), urls = urls.len(), "URL list loaded");

        Ok(urls
            .into_iter()
            .take(MAX_SOURCES)
            .enumerate()
            .map(|(i, url)| Candidate::new(i + 1, url))
            .collect())
    }

    async fn retrieve(&self, candidate: &Candidate) -> FetchResult<SourceContent> {
        let page = self.fetcher.fetch(&candidate.url).await?;
        Ok(SourceContent::Markup(page.body))
    }

    fn name(&self) -> &str {
        "url-list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::MockFetcher;
    use crate::run_log::RunLogger;
    use crate::types::{keyword::Keyword, workspace::Workspace};
    use tempfile::TempDir;

    #[test]
    fn test_parse_url_list_skips_blank_lines() {
        let urls = parse_url_list("https://a.com\n\n   \n  https://b.com  \r\n");
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_candidates_bounded_and_positional() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("urls.txt");
        let contents: String = (1..=8).map(|i| format!("https://e.com/{i}\n\n")).collect();
        std::fs::write(&list, contents).unwrap();

        let keyword = Keyword::new("k").unwrap();
        let workspace = Workspace::for_keyword(dir.path(), &keyword);
        workspace.create().unwrap();
        let log = RunLogger::new(workspace.log_path()).quiet();
        let ctx = SourceContext {
            keyword: &keyword,
            workspace: &workspace,
            log: &log,
        };

        let source = UrlListSource::new(&list, MockFetcher::new());
        let candidates = source.candidates(&ctx).await.unwrap();

        assert_eq!(candidates.len(), MAX_SOURCES);
        assert_eq!(candidates[0], Candidate::new(1, "https://e.com/1"));
        assert_eq!(candidates[4], Candidate::new(5, "https://e.com/5"));
    }

    #[tokio::test]
    async fn test_missing_file_is_precondition_failure() {
        let dir = TempDir::new().unwrap();
        let keyword = Keyword::new("k").unwrap();
        let workspace = Workspace::for_keyword(dir.path(), &keyword);
        workspace.create().unwrap();
        let log = RunLogger::new(workspace.log_path()).quiet();
        let ctx = SourceContext {
            keyword: &keyword,
            workspace: &workspace,
            log: &log,
        };

        let source = UrlListSource::new(dir.path().join("urls.txt"), MockFetcher::new());
        let err = source.candidates(&ctx).await.unwrap_err();

        assert!(matches!(err, ResearchError::InputNotFound { .. }));
        let logged = std::fs::read_to_string(log.path()).unwrap();
        assert!(logged.contains("File not found"));
    }
}
