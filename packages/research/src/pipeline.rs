//! The research pipeline: acquire → extract → store → analyze → outline →
//! prompt (→ titles).
//!
//! One `Pipeline` value holds the run state (keyword, workspace store and
//! logger) and each stage receives only what it needs. Sources come from a
//! pluggable [`SourceStrategy`], so the URL-list and search entry points
//! share every stage after acquisition.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::WordCountAnalyzer;
use crate::error::{ExtractError, Result};
use crate::extract::ContentExtractor;
use crate::outline::{Outline, OutlineGenerator};
use crate::prompt::{group_thousands, Prompt, PromptComposer};
use crate::run_log::RunLogger;
use crate::store::CorpusStore;
use crate::titles::TitleGenerator;
use crate::traits::source::{SourceContent, SourceContext, SourceStrategy};
use crate::types::{
    config::{ResearchConfig, DEFAULT_WORD_COUNT, PROMPT_PREVIEW_CHARS},
    keyword::Keyword,
    workspace::Workspace,
};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub workspace: PathBuf,

    /// Candidates attempted in stage 1
    pub attempted: usize,

    /// Indices of articles saved in this run
    pub stored: Vec<usize>,

    /// Candidates skipped (fetch error, short content, save failure)
    pub skipped: usize,

    /// Articles in the corpus at analysis time, including earlier runs
    pub corpus_size: usize,

    pub recommendation: usize,
}

/// Stage 1 results.
struct Acquisition {
    attempted: usize,
    stored: Vec<usize>,
    skipped: usize,
    titles: Vec<String>,
}

pub struct Pipeline {
    keyword: Keyword,
    store: CorpusStore,
    log: RunLogger,
    extractor: ContentExtractor,
    analyzer: WordCountAnalyzer,
    outlines: OutlineGenerator,
    composer: PromptComposer,
    titles: Option<TitleGenerator>,
}

impl Pipeline {
    /// Open the keyword's workspace under `config.base_dir`.
    pub fn new(keyword: Keyword, config: &ResearchConfig) -> Result<Self> {
        let workspace = Workspace::for_keyword(&config.base_dir, &keyword);
        let store = CorpusStore::open(workspace)?;
        let log = RunLogger::new(store.workspace().log_path());

        Ok(Self {
            keyword,
            store,
            log,
            extractor: ContentExtractor::new(),
            analyzer: WordCountAnalyzer::new(),
            outlines: OutlineGenerator::new(),
            composer: PromptComposer::new(),
            titles: None,
        })
    }

    /// Also produce `seo_titles.txt`.
    pub fn with_seo_titles(mut self, generator: TitleGenerator) -> Self {
        self.titles = Some(generator);
        self
    }

    /// Keep the run log off stdout.
    pub fn quiet(mut self) -> Self {
        self.log = self.log.quiet();
        self
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn workspace(&self) -> &Workspace {
        self.store.workspace()
    }

    pub fn logger(&self) -> &RunLogger {
        &self.log
    }

    /// Run every stage. Only a failed precondition in source acquisition
    /// returns `Err`; everything else is logged and recovered.
    pub async fn run<S>(&self, strategy: &S) -> Result<RunReport>
    where
        S: SourceStrategy + ?Sized,
    {
        self.header(strategy.name());
        info!(keyword = %self.keyword, strategy = strategy.name(), "Research run starting");

        let acquired = self.acquire(strategy).await.inspect_err(|e| {
            warn!(keyword = %self.keyword, error = %e, "Run halted");
        })?;

        let (recommendation, corpus_size) = self.analyze().await;
        let outline = self.outline().await;
        self.prompt(recommendation, &outline).await;

        if let Some(generator) = &self.titles {
            self.seo_titles(generator, acquired.titles).await;
        }

        self.footer();

        info!(
            keyword = %self.keyword,
            attempted = acquired.attempted,
            stored = acquired.stored.len(),
            skipped = acquired.skipped,
            recommendation,
            "Research run complete"
        );

        Ok(RunReport {
            workspace: self.workspace().root().to_path_buf(),
            attempted: acquired.attempted,
            stored: acquired.stored,
            skipped: acquired.skipped,
            corpus_size,
            recommendation,
        })
    }

    fn header(&self, strategy: &str) {
        let rule = "=".repeat(80);
        self.log.log("");
        self.log.log(&rule);
        self.log.log(format!("SEO Research Started ({strategy})"));
        self.log.log(&rule);
        self.log.log(format!("Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
        self.log.log(format!("Keyword: {}", self.keyword));
    }

    fn footer(&self) {
        let rule = "=".repeat(80);
        self.log.log("");
        self.log.log(&rule);
        self.log.log("✅ All steps complete!");
        self.log.log(&rule);
        self.log.log(format!(
            "📁 Files saved in: {}/",
            self.workspace().root().display()
        ));
    }

    async fn acquire<S>(&self, strategy: &S) -> Result<Acquisition>
    where
        S: SourceStrategy + ?Sized,
    {
        self.log.section("[Step 1] Collect source articles");

        let ctx = SourceContext {
            keyword: &self.keyword,
            workspace: self.store.workspace(),
            log: &self.log,
        };
        let candidates = strategy.candidates(&ctx).await?;

        let mut acquired = Acquisition {
            attempted: candidates.len(),
            stored: Vec::new(),
            skipped: 0,
            titles: candidates.iter().filter_map(|c| c.title.clone()).collect(),
        };

        for candidate in &candidates {
            self.log.log(format!(
                "📥 Extracting article {}: {}",
                candidate.position, candidate.url
            ));

            let content = match strategy.retrieve(candidate).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(url = %candidate.url, error = %e, "Source skipped");
                    self.log.log(format!("⚠️ Skipped: {e}"));
                    acquired.skipped += 1;
                    continue;
                }
            };

            let cleaned = match content {
                SourceContent::Markup(markup) => self.extractor.extract(&markup),
                SourceContent::Text(text) => self.extractor.clean_text(&text),
            };

            let text = match cleaned {
                Ok(text) => text,
                Err(ExtractError::InsufficientContent { length, .. }) => {
                    self.log
                        .log(format!("⚠️ Skipped: content too short ({length} chars)"));
                    acquired.skipped += 1;
                    continue;
                }
            };

            match self.store.save(candidate.position, &text).await {
                Ok(_) => {
                    let words = crate::analysis::word_count(&text);
                    self.log
                        .log(format!("✅ Extracted {} words", group_thousands(words)));
                    acquired.stored.push(candidate.position);
                }
                Err(e) => {
                    warn!(url = %candidate.url, error = %e, "Could not save article");
                    self.log.log(format!(
                        "❌ Could not save article {}: {e}",
                        candidate.position
                    ));
                    acquired.skipped += 1;
                }
            }
        }

        Ok(acquired)
    }

    /// Returns the recommendation and the corpus size.
    async fn analyze(&self) -> (usize, usize) {
        self.log.section("[Step 2] Word count analysis");

        let corpus = match self.store.load_all().await {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(error = %e, "Could not read corpus");
                self.log.log(format!("❌ Could not read articles: {e}"));
                Vec::new()
            }
        };

        for article in &corpus {
            self.log.log(format!(
                "  📄 Article {}: {} words",
                article.index,
                group_thousands(article.word_count)
            ));
        }

        let counts: Vec<usize> = corpus.iter().map(|a| a.word_count).collect();
        let Some(stats) = self.analyzer.stats(&counts) else {
            self.log.log(format!(
                "❌ No article files found, using the default of {} words",
                group_thousands(DEFAULT_WORD_COUNT)
            ));
            return (DEFAULT_WORD_COUNT, 0);
        };

        self.log.log(format!(
            "  Mean: {:.1}  Median: {:.1}",
            stats.mean, stats.median
        ));
        let recommended = stats.recommended;

        self.log.log(format!(
            "✅ Recommended word count: {}",
            group_thousands(recommended)
        ));
        (recommended, corpus.len())
    }

    async fn outline(&self) -> Outline {
        self.log.section("[Step 3] Generate outline");

        let outline = self.outlines.generate(&self.keyword);
        let markdown = outline.to_markdown();
        if self
            .write_artifact(&self.workspace().outline_path(), &markdown)
            .await
        {
            self.log.log("✅ Outline generated");
        }
        self.log.log(&markdown);
        outline
    }

    async fn prompt(&self, word_count: usize, outline: &Outline) -> Prompt {
        self.log.section("[Step 4] Compose writing prompt");

        let prompt = self.composer.compose(&self.keyword, word_count, outline);
        if self
            .write_artifact(&self.workspace().prompt_path(), &prompt.text)
            .await
        {
            self.log.log("✅ Writing prompt generated");
        }

        let (lower, upper) = prompt.range();
        self.log.log(format!(
            "Target: {} words (acceptable {lower}-{upper})",
            group_thousands(word_count)
        ));
        self.log
            .log("[Next: paste the prompt into your writing assistant]");

        let rule = "=".repeat(80);
        self.log.log(&rule);
        let preview = prompt.preview(PROMPT_PREVIEW_CHARS);
        if preview.len() < prompt.text.len() {
            self.log.log(format!("{preview}... [continued] ..."));
        } else {
            self.log.log(preview);
        }
        self.log.log(&rule);

        prompt
    }

    async fn seo_titles(&self, generator: &TitleGenerator, observed: Vec<String>) {
        self.log.section("[Step 5] SEO titles and meta descriptions");

        let set = generator.generate(&self.keyword, observed);

        self.log.log("📋 Page title candidates");
        for (i, title) in set.titles.iter().enumerate() {
            self.log
                .log(format!("{}. ({} chars) {title}", i + 1, title.chars().count()));
        }
        self.log.log("📝 Meta description candidates");
        for (i, desc) in set.descriptions.iter().enumerate() {
            self.log
                .log(format!("{}. ({} chars) {desc}", i + 1, desc.chars().count()));
        }

        if self
            .write_artifact(&self.workspace().titles_path(), &set.render())
            .await
        {
            self.log.log("✅ SEO titles saved");
        }
    }

    /// Best-effort artifact write; `false` (and a log line) on failure.
    async fn write_artifact(&self, path: &Path, contents: &str) -> bool {
        match self.store.write_artifact(path, contents).await {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Artifact write failed");
                self.log
                    .log(format!("❌ Could not write {}: {e}", path.display()));
                false
            }
        }
    }
}
