// file: src/store/vocabulary.rs
// description: personal vocabulary list with dictionary-backed definitions

use crate::dictionary::DictionaryClient;
use crate::error::{Result, ViewerError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: String,
    pub text: String,
    pub phonetic: String,
    pub meaning: String,
    pub added_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyPage {
    pub total: usize,
    pub items: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub entry: VocabularyEntry,
    pub created: bool,
}

/// Single-file JSON persistence for the vocabulary list, newest entry
/// first. Definitions come from the dictionary collaborator at add time.
pub struct VocabularyStore {
    path: PathBuf,
    dictionary: DictionaryClient,
}

impl VocabularyStore {
    pub async fn new(path: PathBuf, dictionary: DictionaryClient) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| ViewerError::FileOperation {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(Self { path, dictionary })
    }

    async fn load(&self) -> Result<Vec<VocabularyEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ViewerError::FileOperation {
                path: self.path.clone(),
                source: e,
            })?;

        match serde_json::from_str(&contents) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!("Vocabulary file unreadable, starting fresh: {}", err);
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, items: &[VocabularyEntry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(items)?;

        fs::write(&self.path, contents)
            .await
            .map_err(|e| ViewerError::FileOperation {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Add a word to the list. Idempotent case-insensitively: if the word is
    /// already present the existing entry is returned unchanged. A failed
    /// definition lookup degrades to a placeholder meaning and the add still
    /// succeeds.
    pub async fn add(&self, word: &str) -> Result<AddOutcome> {
        let mut items = self.load().await?;

        let lowered = word.to_lowercase();
        if let Some(existing) = items.iter().find(|item| item.text.to_lowercase() == lowered) {
            debug!("Vocabulary entry already exists for {}", word);
            return Ok(AddOutcome {
                entry: existing.clone(),
                created: false,
            });
        }

        let info = self.dictionary.lookup(word).await;

        let added_at = Utc::now().timestamp_millis();
        let mut stamp = added_at;
        while items.iter().any(|item| item.id == format!("wd_{}", stamp)) {
            stamp += 1;
        }

        let entry = VocabularyEntry {
            id: format!("wd_{}", stamp),
            text: word.to_string(),
            phonetic: info.phonetic,
            meaning: info.meaning,
            added_at,
        };

        items.insert(0, entry.clone());
        self.persist(&items).await?;

        Ok(AddOutcome {
            entry,
            created: true,
        })
    }

    /// Remove an entry by id. Removing an unknown id is a no-op success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.load().await?;
        items.retain(|item| item.id != id);
        self.persist(&items).await
    }

    /// 1-based offset slice of the list plus the total count.
    pub async fn page(&self, page: usize, limit: usize) -> Result<VocabularyPage> {
        let items = self.load().await?;
        let total = items.len();

        let start = page.saturating_sub(1).saturating_mul(limit);
        let items = items.into_iter().skip(start).take(limit).collect();

        Ok(VocabularyPage { total, items })
    }
}
