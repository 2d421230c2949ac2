//! Search-engine results via a headless browser subprocess.
//!
//! Generates a Puppeteer script in the workspace, runs it under `node`
//! and reads back `search_results.jsonl`, one JSON object appended per
//! visited page. A line cut short by a killed subprocess is skipped, so
//! every page finished before the kill survives. Requires Node.js with the
//! `puppeteer` package resolvable from the workspace.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::run_log::RunLogger;
use crate::traits::searcher::{SearchHit, Searcher};
use crate::types::config::{ResearchConfig, MAX_SOURCES};
use crate::types::keyword::Keyword;
use crate::types::workspace::{Workspace, SEARCH_RESULTS_FILE, SEARCH_SCRIPT_FILE};

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// How long to keep reading subprocess output after it exits or is killed.
const OUTPUT_GRACE: Duration = Duration::from_secs(2);

const SCRIPT_TEMPLATE: &str = r#"const puppeteer = require('puppeteer');
const fs = require('fs');

const SEARCH_URL = __SEARCH_URL__;
const USER_AGENT = __USER_AGENT__;
const RESULTS_FILE = __RESULTS_FILE__;
const MAX_RESULTS = __MAX_RESULTS__;

(async () => {
    let browser;
    try {
        console.log('Launching browser...');
        browser = await puppeteer.launch({ headless: true, args: ['--no-sandbox'] });

        const page = await browser.newPage();
        await page.setDefaultNavigationTimeout(30000);
        await page.setUserAgent(USER_AGENT);

        console.log('Opening search page...');
        await page.goto(SEARCH_URL, { waitUntil: 'networkidle2', timeout: 30000 });
        await page.waitForSelector('div.g', { timeout: 10000 });

        const results = await page.evaluate((max) => {
            const items = document.querySelectorAll('div.g');
            const top = [];
            for (const item of items) {
                if (top.length >= max) break;
                const link = item.querySelector('a[href]');
                const title = item.querySelector('h3');
                if (!link || !title) continue;
                const url = link.href;
                if (url.includes('google.com') || url.includes('youtube.com') || !url.startsWith('http')) continue;
                top.push({ position: top.length + 1, title: title.innerText, url });
            }
            return top;
        }, MAX_RESULTS);

        console.log('Found ' + results.length + ' results');

        for (const result of results) {
            console.log('Extracting result ' + result.position + ': ' + result.url);
            let text = '';
            try {
                const articlePage = await browser.newPage();
                await articlePage.setDefaultNavigationTimeout(20000);
                await articlePage.goto(result.url, { waitUntil: 'networkidle2', timeout: 20000 });
                text = await articlePage.evaluate(() => {
                    document.querySelectorAll('script, style, nav, footer, aside, form').forEach(el => el.remove());
                    const root = document.querySelector('article') || document.querySelector('main') || document.body;
                    return root ? root.innerText : '';
                });
                await articlePage.close();
            } catch (error) {
                console.log('Could not extract: ' + error.message);
            }
            fs.appendFileSync(RESULTS_FILE, JSON.stringify({ ...result, text }) + '\n', 'utf-8');
            await new Promise(resolve => setTimeout(resolve, 2000));
        }

        console.log('Done');
        await browser.close();
        process.exit(0);
    } catch (error) {
        console.error('Error: ' + error.message);
        if (browser) await browser.close();
        process.exit(1);
    }
})();
"#;

/// `Searcher` backed by a generated Puppeteer script.
pub struct BrowserSearch {
    node_bin: String,
    timeout: Duration,
    user_agent: String,
    max_results: usize,
}

impl BrowserSearch {
    pub fn new(node_bin: impl Into<String>, timeout: Duration) -> Self {
        Self {
            node_bin: node_bin.into(),
            timeout,
            user_agent: ResearchConfig::default().user_agent,
            max_results: MAX_SOURCES,
        }
    }

    pub fn from_config(config: &ResearchConfig) -> Self {
        Self::new(&config.node_bin, config.browser_timeout).with_user_agent(&config.user_agent)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Search-engine URL for the keyword.
    pub fn search_url(keyword: &Keyword) -> String {
        Url::parse_with_params(SEARCH_ENDPOINT, &[("q", keyword.as_str())])
            .map(|u| u.to_string())
            .unwrap_or_else(|_| SEARCH_ENDPOINT.to_string())
    }

    /// Automation script source. Inserted values are JSON string literals.
    pub fn render_script(&self, search_url: &str) -> String {
        SCRIPT_TEMPLATE
            .replace("__SEARCH_URL__", &js_string(search_url))
            .replace("__USER_AGENT__", &js_string(&self.user_agent))
            .replace("__RESULTS_FILE__", &js_string(SEARCH_RESULTS_FILE))
            .replace("__MAX_RESULTS__", &self.max_results.to_string())
    }

    /// Hits persisted by the script so far; none if it never wrote the file.
    ///
    /// Lines that do not decode (a record interrupted mid-write) are skipped.
    async fn read_results(&self, path: &Path) -> FetchResult<Vec<SearchHit>> {
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FetchError::Decode(format!("{}: {e}", path.display()))),
        };

        let mut hits: Vec<SearchHit> = String::from_utf8_lossy(&raw)
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(n, line)| match serde_json::from_str(line) {
                Ok(hit) => Some(hit),
                Err(e) => {
                    warn!(path = %path.display(), line = n + 1, error = %e, "Skipping unreadable search result");
                    None
                }
            })
            .collect();
        hits.sort_by_key(|h| h.position);
        hits.truncate(self.max_results);
        Ok(hits)
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Everything the pipe yields until EOF or a read error.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            debug!(error = %e, "Subprocess pipe read ended early");
        }
    }
    buf
}

/// Output gathered by a `drain` task. Gives up after `OUTPUT_GRACE` when a
/// grandchild still holds the pipe open.
async fn collect(task: JoinHandle<Vec<u8>>) -> Vec<u8> {
    match tokio::time::timeout(OUTPUT_GRACE, task).await {
        Ok(Ok(buf)) => buf,
        _ => Vec::new(),
    }
}

fn surface_output(log: &RunLogger, stream: &[u8]) {
    for line in String::from_utf8_lossy(stream).lines() {
        let line = line.trim_end();
        if !line.is_empty() {
            log.log(format!("   │ {line}"));
        }
    }
}

#[async_trait]
impl Searcher for BrowserSearch {
    async fn search_and_fetch(
        &self,
        keyword: &Keyword,
        workspace: &Workspace,
        log: &RunLogger,
    ) -> FetchResult<Vec<SearchHit>> {
        let search_url = Self::search_url(keyword);
        log.log(format!("🔎 Search URL: {search_url}"));

        let script_path = workspace.search_script_path();
        tokio::fs::write(&script_path, self.render_script(&search_url))
            .await
            .map_err(|e| FetchError::Subprocess(format!("cannot write script: {e}")))?;

        let results_path = workspace.search_results_path();
        if let Err(e) = tokio::fs::remove_file(&results_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %results_path.display(), error = %e, "Could not clear stale results");
            }
        }

        log.log(format!("📝 Script written: {}", script_path.display()));

        let node = which::which(&self.node_bin).map_err(|e| {
            FetchError::Subprocess(format!("browser runtime '{}' not found: {e}", self.node_bin))
        })?;

        log.log(format!(
            "⏳ Running browser automation (up to {}s)...",
            self.timeout.as_secs()
        ));
        info!(node = %node.display(), script = SEARCH_SCRIPT_FILE, "Launching browser subprocess");

        let mut child = Command::new(&node)
            .arg(SEARCH_SCRIPT_FILE)
            .current_dir(workspace.root())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                FetchError::Subprocess(format!("failed to launch {}: {e}", node.display()))
            })?;

        let stdout = tokio::spawn(drain(child.stdout.take()));
        let stderr = tokio::spawn(drain(child.stderr.take()));

        let outcome = tokio::time::timeout(self.timeout, child.wait()).await;
        if outcome.is_err() {
            if let Err(e) = child.kill().await {
                warn!(error = %e, "Could not kill browser subprocess");
            }
        }

        surface_output(log, &collect(stdout).await);
        surface_output(log, &collect(stderr).await);

        match outcome {
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Browser subprocess timed out");
                log.log(format!(
                    "⚠️ Browser automation timed out after {}s",
                    self.timeout.as_secs()
                ));
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Lost track of browser subprocess");
                log.log(format!("⚠️ Browser automation failed: {e}"));
            }
            Ok(Ok(status)) if status.success() => {
                log.log("✅ Search and extraction finished");
            }
            Ok(Ok(status)) => {
                warn!(status = %status, "Browser subprocess failed");
                log.log(format!("⚠️ Browser automation exited with {status}"));
            }
        }

        let hits = self.read_results(&results_path).await?;
        log.log(format!("📄 {} search results persisted", hits.len()));
        Ok(hits)
    }

    fn name(&self) -> &str {
        "browser"
    }
}
