//! Per-keyword output directory and the artifact paths inside it.

use std::path::{Path, PathBuf};

use super::keyword::Keyword;

pub const ARTICLE_PREFIX: &str = "article_";
pub const ARTICLE_EXTENSION: &str = ".txt";
pub const OUTLINE_FILE: &str = "outline.md";
pub const PROMPT_FILE: &str = "writing_prompt.txt";
pub const LOG_FILE: &str = "log.txt";
pub const TITLES_FILE: &str = "seo_titles.txt";
pub const SEARCH_SCRIPT_FILE: &str = "google_search.js";
pub const SEARCH_RESULTS_FILE: &str = "search_results.jsonl";

/// Directory holding every artifact for one keyword.
///
/// Derived deterministically from the keyword, so repeated runs against
/// the same keyword accumulate into the same place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Workspace for `keyword` under `base_dir`.
    pub fn for_keyword(base_dir: impl AsRef<Path>, keyword: &Keyword) -> Self {
        Self {
            root: base_dir.as_ref().join(keyword.workspace_name()),
        }
    }

    /// Create the directory if it does not exist yet.
    pub fn create(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn article_path(&self, index: usize) -> PathBuf {
        self.root.join(article_file_name(index))
    }

    pub fn outline_path(&self) -> PathBuf {
        self.root.join(OUTLINE_FILE)
    }

    pub fn prompt_path(&self) -> PathBuf {
        self.root.join(PROMPT_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    pub fn titles_path(&self) -> PathBuf {
        self.root.join(TITLES_FILE)
    }

    pub fn search_script_path(&self) -> PathBuf {
        self.root.join(SEARCH_SCRIPT_FILE)
    }

    pub fn search_results_path(&self) -> PathBuf {
        self.root.join(SEARCH_RESULTS_FILE)
    }
}

/// `article_<index>.txt`
pub fn article_file_name(index: usize) -> String {
    format!("{ARTICLE_PREFIX}{index}{ARTICLE_EXTENSION}")
}

/// Inverse of [`article_file_name`]; `None` for any other file name.
pub fn parse_article_index(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(ARTICLE_PREFIX)?
        .strip_suffix(ARTICLE_EXTENSION)?
        .parse()
        .ok()
}
