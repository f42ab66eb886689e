use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::generator::GeneratorConfig;
use self::store::StoreConfig;

pub mod anki;
pub mod generator;
pub mod store;

fn default_timeout_seconds() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub generator: GeneratorConfig,
    pub anki: AnkiConfig,

    /// Upper bound on one generation request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Config {
    /// Defaults, overridden by environment variables where set
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Config {
            store: StoreConfig::new(),
            generator: GeneratorConfig::new(),
            anki: AnkiConfig::new(),
            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            generator: GeneratorConfig::default(),
            anki: AnkiConfig::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_fills_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "generator": { "api_key": "sk-test" }, "anki": { "deck": "Français" } }"#,
        )
        .unwrap();

        assert_eq!(config.generator.api_key, "sk-test");
        assert_eq!(config.generator.max_tokens, 8192);
        assert_eq!(config.anki.deck, "Français");
        assert_eq!(config.anki.url, "http://localhost:8765");
        assert_eq!(config.store.document, "FrenchVocab.tex");
        assert_eq!(config.timeout_seconds, 60);
    }
}
