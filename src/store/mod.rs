// file: src/store/mod.rs
// description: persistence module exports
// reference: internal module structure

pub mod annotations;
pub mod essays;
pub mod keys;
pub mod vocabulary;

pub use annotations::AnnotationStore;
pub use essays::EssayStore;
pub use keys::storage_key;
pub use vocabulary::{AddOutcome, VocabularyEntry, VocabularyPage, VocabularyStore};
