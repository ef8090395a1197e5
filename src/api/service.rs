// file: src/api/service.rs
// description: service facade composing catalog, content, stores, and dictionary

use crate::api::response::ApiResponse;
use crate::catalog::{DocumentCatalog, Section};
use crate::config::Config;
use crate::content::{ContentService, DocumentContent};
use crate::dictionary::DictionaryClient;
use crate::error::Result;
use crate::store::{
    AnnotationStore, EssayStore, VocabularyEntry, VocabularyPage, VocabularyStore,
};
use serde::Serialize;
use serde_json::Value;

/// One constructed object per backend operation set; the seam an HTTP
/// router would bind to. Every method returns the response envelope rather
/// than a raw error.
pub struct ViewerService {
    catalog: DocumentCatalog,
    content: ContentService,
    annotations: AnnotationStore,
    essays: EssayStore,
    vocabulary: VocabularyStore,
    dictionary: DictionaryClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct EssayContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub examples: Vec<String>,
}

impl ViewerService {
    pub async fn new(config: Config) -> Result<Self> {
        let catalog = DocumentCatalog::new(config.documents.clone())?;
        let content = ContentService::new(config.documents.clone());
        let annotations = AnnotationStore::new(config.storage.annotations_dir.clone()).await?;
        let essays = EssayStore::new(config.storage.essays_dir.clone()).await?;
        let dictionary = DictionaryClient::new(config.dictionary.clone())?;
        let vocabulary =
            VocabularyStore::new(config.storage.vocabulary_file.clone(), dictionary.clone())
                .await?;

        Ok(Self {
            catalog,
            content,
            annotations,
            essays,
            vocabulary,
            dictionary,
        })
    }

    pub fn list_documents(&self) -> ApiResponse<Vec<Section>> {
        match self.catalog.list_sections() {
            Ok(sections) => ApiResponse::ok(sections),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub fn get_content(&self, doc_id: &str) -> ApiResponse<DocumentContent> {
        match self.content.get_content(doc_id) {
            Ok(content) => ApiResponse::ok(content),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn get_annotations(&self, doc_id: &str) -> ApiResponse<Vec<Value>> {
        match self.annotations.get(doc_id).await {
            Ok(strokes) => ApiResponse::ok(strokes),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn save_annotations(&self, doc_id: &str, strokes: &[Value]) -> ApiResponse<()> {
        match self.annotations.save(doc_id, strokes).await {
            Ok(()) => ApiResponse::message("Saved successfully"),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn get_essay(&self, doc_id: &str) -> ApiResponse<EssayContent> {
        match self.essays.get(doc_id).await {
            Ok(content) => ApiResponse::ok(EssayContent { content }),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn save_essay(&self, doc_id: &str, content: &str) -> ApiResponse<()> {
        match self.essays.save(doc_id, content).await {
            Ok(()) => ApiResponse::message("Saved successfully"),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn list_vocabulary(&self, page: usize, limit: usize) -> ApiResponse<VocabularyPage> {
        match self.vocabulary.page(page, limit).await {
            Ok(page) => ApiResponse::ok(page),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn add_vocabulary(&self, word: &str) -> ApiResponse<VocabularyEntry> {
        match self.vocabulary.add(word).await {
            Ok(outcome) if outcome.created => {
                ApiResponse::ok_with_message(outcome.entry, "Added successfully")
            }
            Ok(outcome) => ApiResponse::ok_with_message(outcome.entry, "Already exists"),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn delete_vocabulary(&self, id: &str) -> ApiResponse<()> {
        match self.vocabulary.delete(id).await {
            Ok(()) => ApiResponse::message("Deleted successfully"),
            Err(err) => ApiResponse::from_error(&err),
        }
    }

    pub async fn lookup_word(&self, word: &str) -> ApiResponse<LookupResult> {
        let info = self.dictionary.lookup(word).await;

        ApiResponse::ok(LookupResult {
            word: word.to_string(),
            phonetic: info.phonetic,
            meaning: info.meaning,
            examples: Vec::new(),
        })
    }
}
