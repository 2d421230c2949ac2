//! Persisted articles and the candidates they come from.

use serde::{Deserialize, Serialize};

/// A source considered during a run, in the order it will be attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// 1-based position within the run's source list
    pub position: usize,

    pub url: String,

    /// Result title, when the source came from a search
    pub title: Option<String>,

    /// Text already extracted by an external collaborator
    pub prefetched: Option<String>,
}

impl Candidate {
    pub fn new(position: usize, url: impl Into<String>) -> Self {
        Self {
            position,
            url: url.into(),
            title: None,
            prefetched: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_prefetched(mut self, text: impl Into<String>) -> Self {
        self.prefetched = Some(text.into());
        self
    }
}

/// One cleaned article read back from the workspace.
///
/// The word count is derived from the text on every load and never stored
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub index: usize,

    /// Byte length of the cleaned text as persisted, not of the fetched page
    pub text_bytes: usize,

    pub text: String,
    pub word_count: usize,
}

impl Article {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            index,
            text_bytes: text.len(),
            word_count: crate::analysis::word_count(&text),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_derives_counts() {
        let article = Article::new(2, "one two\nthree  four");
        assert_eq!(article.index, 2);
        assert_eq!(article.word_count, 4);
        assert_eq!(article.text_bytes, 19);
    }

    #[test]
    fn test_text_bytes_measures_stored_text() {
        let article = Article::new(1, "冷萃 coffee");
        assert_eq!(article.text_bytes, "冷萃 coffee".len());
        assert_eq!(article.text_bytes, 13);
        assert_eq!(article.word_count, 2);
    }

    #[test]
    fn test_candidate_builder() {
        let c = Candidate::new(1, "https://example.com")
            .with_title("Example")
            .with_prefetched("body");
        assert_eq!(c.title.as_deref(), Some("Example"));
        assert_eq!(c.prefetched.as_deref(), Some("body"));
    }
}
