//! The research keyword and the names derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ResearchError, Result};

/// Immutable research topic.
///
/// Created once at run start. The workspace directory and every artifact
/// title are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword(String);

impl Keyword {
    /// Create a keyword, rejecting empty or whitespace-only input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ResearchError::InvalidKeyword);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Join command-line words into a keyword.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe identifier: lowercased, whitespace runs and path
    /// separators replaced by `_`.
    pub fn slug(&self) -> String {
        self.0
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .replace(['/', '\\'], "_")
    }

    /// Workspace directory name for this keyword.
    pub fn workspace_name(&self) -> String {
        format!("research_{}", self.slug())
    }

    /// Title-cased form used in headings ("cold brew" -> "Cold Brew").
    ///
    /// A letter is upper-cased when it starts a run of cased letters and
    /// lower-cased otherwise.
    pub fn title_case(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut prev_cased = false;
        for c in self.0.chars() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = c.is_lowercase() || c.is_uppercase();
        }
        out
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
