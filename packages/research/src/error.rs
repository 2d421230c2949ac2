//! Typed errors for the research library.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the binaries wrap
//! these with `anyhow` context at the process boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that halt a pipeline run or a store operation.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Required input file is missing
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("cannot read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Keyword was empty after trimming
    #[error("keyword must not be empty")]
    InvalidKeyword,

    /// Workspace read/write failed
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Fetch operation failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Errors raised while acquiring a single source.
///
/// These never abort a run; the pipeline logs them and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with something other than 200
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection or subprocess timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Browser automation could not be launched or crashed
    #[error("subprocess error: {0}")]
    Subprocess(String),

    /// Output of an external collaborator could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Content-quality rejection from the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("content too short: {length} chars (need more than {minimum})")]
    InsufficientContent { length: usize, minimum: usize },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
