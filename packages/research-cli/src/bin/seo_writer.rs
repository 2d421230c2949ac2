//! Research a keyword from live search results and draft SEO titles.

use anyhow::{Context, Result};
use clap::Parser;
use research::{BrowserSearch, Pipeline, SearchSource, TitleGenerator};
use research_cli::{init_tracing, load_config, print_summary, resolve_keyword, KeywordArgs};

/// Collect top search results for a keyword and derive writing targets
#[derive(Debug, Parser)]
#[command(name = "seo-writer", version)]
struct Cli {
    #[command(flatten)]
    args: KeywordArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config()?;
    let keyword = resolve_keyword(&cli.args)?;
    tracing::info!(keyword = %keyword, "Keyword resolved");

    let source = SearchSource::new(BrowserSearch::from_config(&config));
    let pipeline = Pipeline::new(keyword, &config)
        .context("Failed to open workspace")?
        .with_seo_titles(TitleGenerator::new());

    let report = pipeline.run(&source).await.context("Research run halted")?;

    print_summary(&report);
    Ok(())
}
