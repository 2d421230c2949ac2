//! Shared plumbing for the `seo-extract` and `seo-writer` binaries.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use research::{Keyword, ResearchConfig, RunReport};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keyword given as free-form words on the command line.
#[derive(Debug, Parser)]
pub struct KeywordArgs {
    /// Keyword to research (multiple words are joined with spaces)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub keyword: Vec<String>,
}

impl KeywordArgs {
    /// Keyword from the arguments, or `None` when none were given.
    pub fn keyword(&self) -> Result<Option<Keyword>> {
        if self.keyword.iter().all(|word| word.trim().is_empty()) {
            return Ok(None);
        }
        Keyword::from_args(&self.keyword)
            .map(Some)
            .context("Invalid keyword")
    }
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "warn,research=info,research_cli=info,seo_extract=info,seo_writer=info";

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `.env` (if present) plus `SEO_*` overrides.
pub fn load_config() -> Result<ResearchConfig> {
    dotenvy::dotenv().ok();
    let config = ResearchConfig::from_env().context("Failed to load configuration")?;
    info!(
        base_dir = %config.base_dir.display(),
        urls_file = %config.urls_file.display(),
        http_timeout_secs = config.http_timeout.as_secs(),
        browser_timeout_secs = config.browser_timeout.as_secs(),
        node_bin = %config.node_bin,
        "Configuration loaded"
    );
    Ok(config)
}

/// Keyword from the arguments, prompting for one when they are empty.
pub fn resolve_keyword(args: &KeywordArgs) -> Result<Keyword> {
    if let Some(keyword) = args.keyword()? {
        return Ok(keyword);
    }

    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Keyword")
        .interact_text()?;
    Keyword::new(raw).context("Invalid keyword")
}

pub fn print_summary(report: &RunReport) {
    println!();
    println!(
        "{}",
        style(format!(
            "✨ {} of {} sources stored, target {} words",
            report.stored.len(),
            report.attempted,
            report.recommendation
        ))
        .green()
        .bold()
    );
    println!(
        "{} {}",
        style("📁").cyan(),
        style(report.workspace.display()).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_joined_into_keyword() {
        let args = KeywordArgs::parse_from(["seo-extract", "cold", "brew", "coffee"]);
        let keyword = args.keyword().unwrap().unwrap();
        assert_eq!(keyword.as_str(), "cold brew coffee");
    }

    #[test]
    fn test_no_words_means_prompt() {
        let args = KeywordArgs::parse_from(["seo-writer"]);
        assert!(args.keyword().unwrap().is_none());

        let blank = KeywordArgs::parse_from(["seo-writer", "  "]);
        assert!(blank.keyword().unwrap().is_none());
    }

    #[test]
    fn test_default_filter_covers_cli_targets() {
        let filter = tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER);
        let rendered = filter.to_string();
        for target in ["research=info", "research_cli=info", "seo_extract=info", "seo_writer=info"] {
            assert!(rendered.contains(target), "missing {target} in {rendered}");
        }
    }
}
