//! Run configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ResearchError, Result};

/// At most this many sources are processed per run.
pub const MAX_SOURCES: usize = 5;

/// Cleaned text must be longer than this (in characters) to be kept.
pub const MIN_CONTENT_CHARS: usize = 500;

/// Recommendation used when the corpus is empty.
pub const DEFAULT_WORD_COUNT: usize = 3000;

/// Number of prompt characters echoed into the run log.
pub const PROMPT_PREVIEW_CHARS: usize = 500;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Configuration shared by both entry points.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Directory under which `research_<slug>` workspaces are created
    pub base_dir: PathBuf,

    /// URL list read by the URL-list variant
    pub urls_file: PathBuf,

    /// Per-request HTTP timeout
    pub http_timeout: Duration,

    /// Wall-clock limit for the browser subprocess
    pub browser_timeout: Duration,

    /// Executable that runs the generated automation script
    pub node_bin: String,

    pub user_agent: String,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            urls_file: PathBuf::from("urls.txt"),
            http_timeout: Duration::from_secs(10),
            browser_timeout: Duration::from_secs(120),
            node_bin: "node".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from `SEO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("SEO_RESEARCH_DIR") {
            config.base_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("SEO_URLS_FILE") {
            config.urls_file = PathBuf::from(file);
        }
        if let Some(secs) = lookup("SEO_HTTP_TIMEOUT_SECS") {
            config.http_timeout = parse_secs("SEO_HTTP_TIMEOUT_SECS", &secs)?;
        }
        if let Some(secs) = lookup("SEO_BROWSER_TIMEOUT_SECS") {
            config.browser_timeout = parse_secs("SEO_BROWSER_TIMEOUT_SECS", &secs)?;
        }
        if let Some(bin) = lookup("SEO_NODE_BIN").filter(|b| !b.trim().is_empty()) {
            config.node_bin = bin;
        }
        if let Some(agent) = lookup("SEO_USER_AGENT").filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_urls_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.urls_file = file.into();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_browser_timeout(mut self, timeout: Duration) -> Self {
        self.browser_timeout = timeout;
        self
    }

    pub fn with_node_bin(mut self, bin: impl Into<String>) -> Self {
        self.node_bin = bin.into();
        self
    }
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ResearchError::Config(format!("{key} must be a positive integer, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ResearchConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.urls_file, PathBuf::from("urls.txt"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.browser_timeout, Duration::from_secs(120));
        assert_eq!(config.node_bin, "node");
    }

    #[test]
    fn test_env_overrides() {
        let config = ResearchConfig::from_lookup(lookup_from(&[
            ("SEO_RESEARCH_DIR", "/data"),
            ("SEO_URLS_FILE", "list.txt"),
            ("SEO_HTTP_TIMEOUT_SECS", "3"),
            ("SEO_NODE_BIN", "/usr/local/bin/node"),
        ]))
        .unwrap();

        assert_eq!(config.base_dir, PathBuf::from("/data"));
        assert_eq!(config.urls_file, PathBuf::from("list.txt"));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.node_bin, "/usr/local/bin/node");
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = ResearchConfig::from_lookup(lookup_from(&[("SEO_BROWSER_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ResearchError::Config(_)));

        let err = ResearchConfig::from_lookup(lookup_from(&[("SEO_HTTP_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("SEO_HTTP_TIMEOUT_SECS"));
    }
}
