//! Append-only, human-readable run log.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

const RULE_WIDTH: usize = 80;

/// Records every stage outcome in `log.txt` and echoes it to the operator.
///
/// Logging is best effort: a failed write is reported through `tracing`
/// and otherwise ignored. Each call is a single `write_all` on a file
/// opened in append mode, so records from earlier runs are kept and lines
/// appear in call order.
#[derive(Debug, Clone)]
pub struct RunLogger {
    path: PathBuf,
    echo: bool,
}

impl RunLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            echo: true,
        }
    }

    /// Do not echo to stdout (tests, embedding).
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        let record = format!("[{}] {}\n", Local::now().format("%Y-%m-%d %H:%M:%S"), message);

        if let Err(e) = self.append(&record) {
            warn!(path = %self.path.display(), error = %e, "Failed to write run log");
        }

        if self.echo {
            println!("{message}");
        }
    }

    /// Ruled banner that opens a stage.
    pub fn section(&self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.log("");
        self.log(&rule);
        self.log(title);
        self.log(&rule);
    }

    fn append(&self, record: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())
    }
}
