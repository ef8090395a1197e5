// file: src/catalog/scanner.rs
// description: Document discovery grouped by exam sitting
// reference: https://docs.rs/walkdir

use crate::config::DocumentsConfig;
use crate::error::{Result, ViewerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct DocumentCatalog {
    config: DocumentsConfig,
    section_pattern: Regex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub year: String,
    pub month: String,
    pub papers: Vec<PaperRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRef {
    pub id: String,
    pub title: String,
    pub filename: String,
}

impl DocumentCatalog {
    pub fn new(config: DocumentsConfig) -> Result<Self> {
        let section_pattern = Regex::new(&config.section_pattern)
            .map_err(|e| ViewerError::Config(format!("invalid section pattern: {}", e)))?;

        Ok(Self {
            config,
            section_pattern,
        })
    }

    /// Walk the document root and group recognized papers by exam sitting,
    /// newest sitting first. Directories that do not match the sitting
    /// pattern contribute nothing.
    pub fn list_sections(&self) -> Result<Vec<Section>> {
        info!("Scanning document root: {}", self.config.root.display());
        let mut sections: BTreeMap<(String, String), Section> = BTreeMap::new();

        for entry in WalkDir::new(&self.config.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            let Some((year, month)) = self.match_sitting(path) else {
                debug!("Skipping file outside a sitting directory: {}", path.display());
                continue;
            };

            if !self.has_recognized_extension(path) {
                continue;
            }

            let Some(paper) = self.paper_ref(path) else {
                continue;
            };

            sections
                .entry((year.clone(), month.clone()))
                .or_insert_with(|| Section {
                    year,
                    month,
                    papers: Vec::new(),
                })
                .papers
                .push(paper);
        }

        let mut result: Vec<Section> = sections.into_values().collect();
        result.sort_by(|a, b| (&b.year, &b.month).cmp(&(&a.year, &a.month)));

        info!("Found {} exam sittings", result.len());
        Ok(result)
    }

    fn match_sitting(&self, path: &Path) -> Option<(String, String)> {
        let dir_name = path.parent()?.file_name()?.to_str()?;
        let captures = self.section_pattern.captures(dir_name)?;
        let year = captures.get(1)?.as_str().to_string();
        let month = captures.get(2)?.as_str().to_string();
        Some((year, month))
    }

    fn has_recognized_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.config.extensions.iter().any(|known| known == &ext)
            }
            None => false,
        }
    }

    fn paper_ref(&self, path: &Path) -> Option<PaperRef> {
        let filename = path.file_name()?.to_str()?.to_string();
        let title = path.file_stem()?.to_str()?.to_string();
        let id = path
            .strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        Some(PaperRef {
            id,
            title,
            filename,
        })
    }
}
