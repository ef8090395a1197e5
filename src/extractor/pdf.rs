// file: src/extractor/pdf.rs
// description: PDF raw line extraction behind an error-tolerant facade
// reference: https://docs.rs/pdf-extract

use std::path::Path;
use tracing::error;

pub const PDF_ERROR_SENTINEL: &str = "Error reading PDF file.";

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract one raw line per visual row, in reading order as segmented by
    /// the layout engine. Never fails: any extraction error degrades to a
    /// single sentinel line.
    pub fn extract(&self, path: &Path) -> Vec<String> {
        match pdf_extract::extract_text(path) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(err) => {
                error!("Error reading PDF {}: {}", path.display(), err);
                vec![PDF_ERROR_SENTINEL.to_string()]
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
