// file: src/extractor/mod.rs
// description: raw line extraction module exports and format dispatch
// reference: internal module structure

pub mod docx;
pub mod pdf;

pub use docx::{DocxExtractor, DOCX_ERROR_SENTINEL};
pub use pdf::{PdfExtractor, PDF_ERROR_SENTINEL};

use std::path::Path;

pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";

/// Dispatch to the extractor for the file's extension. Formats the viewer
/// cannot render (including legacy `.doc`) yield a single explanatory line
/// rather than an error.
pub fn extract_lines(path: &Path) -> Vec<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("pdf") => PdfExtractor::new().extract(path),
        Some("docx") => DocxExtractor::new().extract(path),
        _ => vec![UNSUPPORTED_FORMAT.to_string()],
    }
}
