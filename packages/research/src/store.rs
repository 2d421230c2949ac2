//! File-backed corpus under the keyword workspace.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::types::{
    article::Article,
    workspace::{parse_article_index, Workspace},
};

/// Persists cleaned articles as `article_<n>.txt` and reads them back.
///
/// Articles from earlier runs against the same keyword stay in the
/// workspace and are part of the corpus; a same-index save overwrites.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    workspace: Workspace,
}

impl CorpusStore {
    /// Open the store, creating the workspace directory if needed.
    pub fn open(workspace: Workspace) -> Result<Self> {
        workspace.create()?;
        Ok(Self { workspace })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Write the cleaned text of the article at 1-based `index`.
    pub async fn save(&self, index: usize, text: &str) -> Result<PathBuf> {
        let path = self.workspace.article_path(index);
        tokio::fs::write(&path, text).await?;
        debug!(path = %path.display(), bytes = text.len(), "Article saved");
        Ok(path)
    }

    /// Every article in the workspace, sorted by index.
    pub async fn load_all(&self) -> Result<Vec<Article>> {
        let mut indexed: Vec<(usize, PathBuf)> = Vec::new();
        let mut entries = tokio::fs::read_dir(self.workspace.root()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if let Some(index) = name.to_str().and_then(parse_article_index) {
                if entry.file_type().await?.is_file() {
                    indexed.push((index, entry.path()));
                }
            }
        }
        indexed.sort_by_key(|(index, _)| *index);

        let mut articles = Vec::with_capacity(indexed.len());
        for (index, path) in indexed {
            let bytes = tokio::fs::read(&path).await?;
            articles.push(Article::new(index, String::from_utf8_lossy(&bytes)));
        }
        Ok(articles)
    }

    /// Write a run artifact (outline, prompt, titles) into the workspace.
    pub async fn write_artifact(&self, path: &Path, contents: &str) -> Result<()> {
        tokio::fs::write(path, contents).await?;
        debug!(path = %path.display(), "Artifact written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::keyword::Keyword;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> CorpusStore {
        let keyword = Keyword::new("cold brew").unwrap();
        CorpusStore::open(Workspace::for_keyword(dir.path(), &keyword)).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_load_sorted_numerically() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save(10, "ten words here").await.unwrap();
        store.save(2, "two").await.unwrap();
        store.save(1, "one one").await.unwrap();

        let articles = store.load_all().await.unwrap();
        let indices: Vec<usize> = articles.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![1, 2, 10]);
        assert_eq!(articles[0].word_count, 2);
        assert_eq!(articles[2].word_count, 3);
    }

    #[tokio::test]
    async fn test_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save(1, "kept").await.unwrap();
        store
            .write_artifact(&store.workspace().outline_path(), "# Outline")
            .await
            .unwrap();
        std::fs::write(store.workspace().root().join("article_notes.txt"), "x").unwrap();
        std::fs::create_dir(store.workspace().root().join("article_9.txt")).unwrap();

        let articles = store.load_all().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].text, "kept");
    }

    #[tokio::test]
    async fn test_same_index_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save(1, "first version").await.unwrap();
        store.save(1, "second").await.unwrap();

        let articles = store.load_all().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].text, "second");
    }

    #[tokio::test]
    async fn test_invalid_utf8_read_lossily() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        std::fs::write(store.workspace().article_path(1), b"good \xff words").unwrap();

        let articles = store.load_all().await.unwrap();
        assert_eq!(articles[0].word_count, 3);
    }
}
