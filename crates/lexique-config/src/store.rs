use std::env;

use serde::{Deserialize, Serialize};

fn default_document() -> String {
    "FrenchVocab.tex".to_string()
}

fn default_exported() -> String {
    "exported_words.json".to_string()
}

fn default_max_headword_len() -> usize {
    50
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Vocabulary document, created from a skeleton when missing
    #[serde(default = "default_document")]
    pub document: String,
    /// Already-exported headword keys
    #[serde(default = "default_exported")]
    pub exported: String,
    #[serde(default = "default_max_headword_len")]
    pub max_headword_len: usize,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            document: env::var("LEXIQUE_DOCUMENT").unwrap_or_else(|_| default_document()),
            exported: env::var("LEXIQUE_EXPORTED").unwrap_or_else(|_| default_exported()),
            max_headword_len: default_max_headword_len(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            exported: default_exported(),
            max_headword_len: default_max_headword_len(),
        }
    }
}
