// file: src/dictionary/client.rs
// description: best-effort definition lookups against the Youdao suggest API
// reference: http://dict.youdao.com/suggest

use crate::config::DictionaryConfig;
use crate::error::{Result, ViewerError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    data: Option<SuggestData>,
}

#[derive(Debug, Deserialize)]
struct SuggestData {
    entries: Vec<SuggestEntry>,
}

#[derive(Debug, Deserialize)]
struct SuggestEntry {
    explain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordInfo {
    pub meaning: String,
    // The suggest endpoint does not return pronunciation data, so this is
    // always empty; kept for wire compatibility with the viewer frontend.
    pub phonetic: String,
}

impl WordInfo {
    pub fn placeholder(word: &str) -> Self {
        Self {
            meaning: format!("Meaning of {} (Fetch failed)", word),
            phonetic: String::new(),
        }
    }
}

#[derive(Clone)]
pub struct DictionaryClient {
    client: Client,
    config: DictionaryConfig,
}

impl DictionaryClient {
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ViewerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Best-effort lookup: timeouts, non-200 responses, and malformed bodies
    /// all degrade to a placeholder result instead of propagating.
    pub async fn lookup(&self, word: &str) -> WordInfo {
        match self.fetch(word).await {
            Ok(info) => info,
            Err(err) => {
                warn!("Dictionary lookup failed for {}: {}", word, err);
                WordInfo::placeholder(word)
            }
        }
    }

    async fn fetch(&self, word: &str) -> Result<WordInfo> {
        debug!("Looking up definition for: {}", word);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("num", "1"), ("doctype", "json"), ("q", word)])
            .send()
            .await
            .map_err(|e| ViewerError::Lookup(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ViewerError::Lookup(format!(
                "request returned status {}",
                response.status()
            )));
        }

        let payload: SuggestResponse = response
            .json()
            .await
            .map_err(|e| ViewerError::Lookup(e.to_string()))?;

        let entry = payload
            .data
            .and_then(|data| data.entries.into_iter().next())
            .ok_or_else(|| ViewerError::Lookup(format!("no entries for {}", word)))?;

        Ok(WordInfo {
            meaning: entry.explain.unwrap_or_default(),
            phonetic: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unroutable_client() -> DictionaryClient {
        DictionaryClient::new(DictionaryConfig {
            base_url: "http://127.0.0.1:9/suggest".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_placeholder() {
        let info = unroutable_client().lookup("serendipity").await;
        assert_eq!(info.meaning, "Meaning of serendipity (Fetch failed)");
        assert_eq!(info.phonetic, "");
    }

    #[test]
    fn test_suggest_payload_parsing() {
        let body = r#"{"result":{"code":200},"data":{"entries":[{"entry":"hello","explain":"int. 喂；哈罗"}]}}"#;
        let parsed: SuggestResponse = serde_json::from_str(body).unwrap();
        let entry = parsed.data.unwrap().entries.into_iter().next().unwrap();
        assert_eq!(entry.explain.as_deref(), Some("int. 喂；哈罗"));
    }

    #[test]
    fn test_payload_without_entries() {
        let body = r#"{"data":{"entries":[]}}"#;
        let parsed: SuggestResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data.unwrap().entries.is_empty());
    }
}
