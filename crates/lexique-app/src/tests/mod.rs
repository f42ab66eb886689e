use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lexique_anki::ExportedKeys;
use lexique_config::Config;
use lexique_core::EntryStore;
use lexique_generator::{GenerateError, Generator, ProviderMetadata};

use crate::state::{AppState, SharedGenerator};

mod add_word_tests;
mod export_tests;
mod profile_tests;

/// Replies with fixed text and counts requests
pub struct CannedGenerator {
    reply: String,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl CannedGenerator {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(&self, _headword: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.reply.clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "canned".to_string(),
            model: "none".to_string(),
            requires_api_key: false,
        }
    }
}

/// State over a fresh skeleton document in a temp dir
pub fn scratch_state(generator: Option<SharedGenerator>) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = Config::default();
    config.store.document = dir.path().join("FrenchVocab.tex").display().to_string();
    config.store.exported = dir.path().join("exported_words.json").display().to_string();

    let store = EntryStore::open(&config.store.document).expect("open store");
    let exported = ExportedKeys::load(&config.store.exported).expect("load exported keys");

    (dir, AppState::with_generator(config, store, exported, generator))
}

pub const CHAT: &str = "Correctly Spelt Word: chat
Word Type: noun
Definitions:
a. Cat, a small domesticated feline
b. (informal) A spiteful woman
Examples:
1. Le chat dort sur le canapé.
The cat is sleeping on the sofa.
2. Mon chat aime le poisson.
My cat likes fish.
";
