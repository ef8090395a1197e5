// file: src/content.rs
// description: document content retrieval combining extraction and reconstruction

use crate::config::DocumentsConfig;
use crate::error::{Result, ViewerError};
use crate::extractor;
use crate::reconstruct::LineReconstructor;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub struct ContentService {
    config: DocumentsConfig,
    reconstructor: LineReconstructor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    pub doc_id: String,
    pub title: String,
    pub lines: Vec<String>,
    pub meta: ContentMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    // The extraction library does not report page counts; kept for wire
    // compatibility with the viewer frontend.
    pub total_pages: u32,
}

impl ContentService {
    pub fn new(config: DocumentsConfig) -> Self {
        Self {
            config,
            reconstructor: LineReconstructor::new(),
        }
    }

    /// Resolve a document id safely, extract its raw lines, and reconstruct
    /// them into logical lines for display and annotation anchoring.
    pub fn get_content(&self, doc_id: &str) -> Result<DocumentContent> {
        let path = Validator::resolve_doc_path(&self.config.root, doc_id)?;

        if !path.exists() {
            return Err(ViewerError::NotFound { path });
        }

        let raw_lines = extractor::extract_lines(&path);
        let lines = self.reconstructor.reconstruct(raw_lines);

        info!("Extracted {} logical lines from {}", lines.len(), doc_id);

        Ok(DocumentContent {
            doc_id: doc_id.to_string(),
            title: Self::title_of(doc_id),
            lines,
            meta: ContentMeta { total_pages: 0 },
        })
    }

    fn title_of(doc_id: &str) -> String {
        Path::new(doc_id)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| doc_id.to_string())
    }
}
