// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ViewerError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub documents: DocumentsConfig,
    pub storage: StorageConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    pub root: PathBuf,
    pub section_pattern: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub annotations_dir: PathBuf,
    pub essays_dir: PathBuf,
    pub vocabulary_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PAPER_DESK")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ViewerError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ViewerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            documents: DocumentsConfig {
                root: PathBuf::from("./cet6document"),
                section_pattern: r"(\d{4})年(\d{2})月CET6真题".to_string(),
                extensions: vec!["pdf".to_string(), "docx".to_string(), "doc".to_string()],
            },
            storage: StorageConfig {
                annotations_dir: PathBuf::from("./data/annotations"),
                essays_dir: PathBuf::from("./data/essays"),
                vocabulary_file: PathBuf::from("./data/vocabulary.json"),
            },
            dictionary: DictionaryConfig {
                base_url: "http://dict.youdao.com/suggest".to_string(),
                timeout_secs: 5,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.documents.extensions.is_empty() {
            return Err(ViewerError::Config(
                "documents.extensions must not be empty".to_string(),
            ));
        }

        if regex::Regex::new(&self.documents.section_pattern).is_err() {
            return Err(ViewerError::Config(format!(
                "documents.section_pattern is not a valid regex: {}",
                self.documents.section_pattern
            )));
        }

        if self.dictionary.timeout_secs == 0 {
            return Err(ViewerError::Config(
                "dictionary.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
