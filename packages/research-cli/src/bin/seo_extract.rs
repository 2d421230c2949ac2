//! Research a keyword from the URLs listed in `urls.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use research::{HttpFetcher, Pipeline, UrlListSource};
use research_cli::{init_tracing, load_config, print_summary, resolve_keyword, KeywordArgs};

/// Extract articles from a URL list and derive writing targets
#[derive(Debug, Parser)]
#[command(name = "seo-extract", version)]
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

    let fetcher = HttpFetcher::from_config(&config).context("Failed to build HTTP client")?;
    let source = UrlListSource::new(&config.urls_file, fetcher);

    let pipeline = Pipeline::new(keyword, &config).context("Failed to open workspace")?;
    let report = pipeline.run(&source).await.context("Research run halted")?;

    print_summary(&report);
    Ok(())
}
