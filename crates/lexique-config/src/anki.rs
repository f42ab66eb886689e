use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "French Vocabulary".to_string()
}

fn default_model() -> String {
    "French Vocab Model".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL, used by `export --connect`
    #[serde(default = "default_url")]
    pub url: String,
    /// Default deck name
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Note type with French / Type / English / Example fields
    #[serde(default = "default_model")]
    pub model: String,
}

impl AnkiConfig {
    pub fn new() -> Self {
        Self {
            url: env::var("ANKI_CONNECT_URL").unwrap_or_else(|_| default_url()),
            deck: default_deck(),
            model: default_model(),
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
        }
    }
}
