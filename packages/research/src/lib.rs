//! Keyword Research Library
//!
//! Turns a keyword into writing targets: collect source articles (from a URL
//! list or from search results), extract their readable text, derive a
//! target word count from the corpus, and compose an outline and a writing
//! brief for a downstream writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use research::{HttpFetcher, Keyword, Pipeline, ResearchConfig, UrlListSource};
//!
//! let config = ResearchConfig::from_env()?;
//! let pipeline = Pipeline::new(Keyword::new("cold brew")?, &config)?;
//! let source = UrlListSource::new(&config.urls_file, HttpFetcher::from_config(&config)?);
//! let report = pipeline.run(&source).await?;
//! println!("target: {} words", report.recommendation);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Fetcher, searcher and source-strategy abstractions
//! - [`types`] - Keyword, workspace, articles and configuration
//! - [`fetchers`] - HTTP fetcher, browser search and mocks
//! - [`sources`] - URL-list and search source strategies
//! - [`extract`] - Readable-text extraction
//! - [`store`] - File-backed corpus
//! - [`analysis`] - Word-count recommendation
//! - [`outline`], [`prompt`], [`titles`] - Generated artifacts
//! - [`run_log`] - Append-only run log
//! - [`pipeline`] - Stage orchestration

pub mod analysis;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod outline;
pub mod pipeline;
pub mod prompt;
pub mod run_log;
pub mod sources;
pub mod store;
pub mod titles;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use analysis::{word_count, CorpusStats, WordCountAnalyzer};
pub use error::{ExtractError, FetchError, ResearchError};
pub use extract::ContentExtractor;
pub use fetchers::{BrowserSearch, HttpFetcher, MockFetcher, MockSearcher};
pub use outline::{Outline, OutlineGenerator};
pub use pipeline::{Pipeline, RunReport};
pub use prompt::{Prompt, PromptComposer};
pub use run_log::RunLogger;
pub use sources::{SearchSource, UrlListSource};
pub use store::CorpusStore;
pub use titles::{TitleGenerator, TitleSet};
pub use traits::{
    fetcher::{FetchedPage, PageFetcher},
    searcher::{SearchHit, Searcher},
    source::{SourceContent, SourceContext, SourceStrategy},
};
pub use types::{
    article::{Article, Candidate},
    config::{ResearchConfig, DEFAULT_WORD_COUNT, MAX_SOURCES, MIN_CONTENT_CHARS},
    keyword::Keyword,
    workspace::Workspace,
};
