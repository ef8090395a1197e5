// file: src/store/annotations.rs
// description: per-document annotation stroke persistence

use crate::error::{Result, ViewerError};
use crate::store::keys::storage_key;
use serde_json::Value;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Whole-file JSON persistence for annotation strokes, one file per
/// document. The stroke payload is opaque to the backend.
pub struct AnnotationStore {
    dir: PathBuf,
}

impl AnnotationStore {
    pub async fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).await.map_err(|e| ViewerError::FileOperation {
            path: dir.clone(),
            source: e,
        })?;

        Ok(Self { dir })
    }

    fn path_for(&self, doc_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", storage_key(doc_id)))
    }

    /// Saved strokes for a document, or an empty list when nothing has been
    /// saved yet. A present but unreadable file is a persistence failure.
    pub async fn get(&self, doc_id: &str) -> Result<Vec<Value>> {
        let path = self.path_for(doc_id);

        if !path.exists() {
            debug!("No annotations stored for {}", doc_id);
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|e| ViewerError::FileOperation { path, source: e })?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Overwrite the entire stroke payload for a document.
    pub async fn save(&self, doc_id: &str, strokes: &[Value]) -> Result<()> {
        let path = self.path_for(doc_id);
        let contents = serde_json::to_string(strokes)?;

        fs::write(&path, contents)
            .await
            .map_err(|e| ViewerError::FileOperation { path, source: e })?;

        debug!("Saved {} strokes for {}", strokes.len(), doc_id);
        Ok(())
    }
}
