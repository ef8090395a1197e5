// file: src/store/essays.rs
// description: per-document essay draft persistence

use crate::error::{Result, ViewerError};
use crate::store::keys::storage_key;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Whole-file plain-text persistence for essay drafts, one markdown file
/// per document.
pub struct EssayStore {
    dir: PathBuf,
}

impl EssayStore {
    pub async fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).await.map_err(|e| ViewerError::FileOperation {
            path: dir.clone(),
            source: e,
        })?;

        Ok(Self { dir })
    }

    fn path_for(&self, doc_id: &str) -> PathBuf {
        self.dir.join(format!("{}.md", storage_key(doc_id)))
    }

    /// Saved essay text, or an empty string when nothing has been saved yet.
    pub async fn get(&self, doc_id: &str) -> Result<String> {
        let path = self.path_for(doc_id);

        if !path.exists() {
            debug!("No essay stored for {}", doc_id);
            return Ok(String::new());
        }

        fs::read_to_string(&path)
            .await
            .map_err(|e| ViewerError::FileOperation { path, source: e })
    }

    /// Overwrite the essay text for a document.
    pub async fn save(&self, doc_id: &str, content: &str) -> Result<()> {
        let path = self.path_for(doc_id);

        fs::write(&path, content)
            .await
            .map_err(|e| ViewerError::FileOperation { path, source: e })?;

        debug!("Saved essay ({} bytes) for {}", content.len(), doc_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_before_save_is_empty() {
        let dir = tempdir().unwrap();
        let store = EssayStore::new(dir.path().join("essays")).await.unwrap();

        assert_eq!(store.get("paper.pdf").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = EssayStore::new(dir.path().join("essays")).await.unwrap();

        store.save("paper.pdf", "# Draft\n\nMy essay.").await.unwrap();
        assert_eq!(store.get("paper.pdf").await.unwrap(), "# Draft\n\nMy essay.");
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let store = EssayStore::new(dir.path().join("essays")).await.unwrap();

        store.save("paper.pdf", "first draft").await.unwrap();
        store.save("paper.pdf", "second draft").await.unwrap();

        assert_eq!(store.get("paper.pdf").await.unwrap(), "second draft");
    }
}
