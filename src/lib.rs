// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod catalog;
pub mod config;
pub mod content;
pub mod dictionary;
pub mod error;
pub mod extractor;
pub mod reconstruct;
pub mod store;
pub mod utils;

pub use api::{ApiResponse, EssayContent, LookupResult, ViewerService};
pub use catalog::{DocumentCatalog, PaperRef, Section};
pub use config::{Config, DictionaryConfig, DocumentsConfig, StorageConfig};
pub use content::{ContentMeta, ContentService, DocumentContent};
pub use dictionary::{DictionaryClient, WordInfo};
pub use error::{Result, ViewerError};
pub use extractor::{DocxExtractor, PdfExtractor};
pub use reconstruct::{LineReconstructor, MergeRule};
pub use store::{
    AnnotationStore, EssayStore, VocabularyEntry, VocabularyPage, VocabularyStore,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _reconstructor = LineReconstructor::new();
    }
}
