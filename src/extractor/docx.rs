// file: src/extractor/docx.rs
// description: DOCX paragraph extraction behind an error-tolerant facade
// reference: https://docs.rs/docx-rs

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::path::Path;
use tracing::error;

pub const DOCX_ERROR_SENTINEL: &str = "Error reading DOCX file.";

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract one raw line per non-empty paragraph. Never fails: any read
    /// or parse error degrades to a single sentinel line.
    pub fn extract(&self, path: &Path) -> Vec<String> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Error reading DOCX {}: {}", path.display(), err);
                return vec![DOCX_ERROR_SENTINEL.to_string()];
            }
        };

        let docx = match read_docx(&bytes) {
            Ok(docx) => docx,
            Err(err) => {
                error!("Error parsing DOCX {}: {}", path.display(), err);
                return vec![DOCX_ERROR_SENTINEL.to_string()];
            }
        };

        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => {
                    let text = Self::paragraph_text(paragraph);
                    if text.trim().is_empty() {
                        None
                    } else {
                        Some(text)
                    }
                }
                _ => None,
            })
            .collect()
    }

    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut text = String::new();

        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
        }

        text
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_degrades_to_sentinel() {
        let lines = DocxExtractor::new().extract(Path::new("/nonexistent/missing.docx"));
        assert_eq!(lines, vec![DOCX_ERROR_SENTINEL.to_string()]);
    }

    #[test]
    fn test_corrupt_file_degrades_to_sentinel() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let lines = DocxExtractor::new().extract(&path);
        assert_eq!(lines, vec![DOCX_ERROR_SENTINEL.to_string()]);
    }
}
