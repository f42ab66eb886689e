use std::sync::Arc;

use anyhow::Context;
use lexique_anki::ExportedKeys;
use lexique_config::Config;
use lexique_config::generator::GeneratorConfig;
use lexique_core::EntryStore;
use lexique_generator::Generator;
use lexique_lang_french::FrenchGenerator;
use tokio::task::JoinHandle;

pub type SharedGenerator = Arc<dyn Generator>;

enum GeneratorSlot {
    Starting(JoinHandle<Option<SharedGenerator>>),
    Ready(Option<SharedGenerator>),
}

pub struct AppState {
    pub config: Config,
    pub store: EntryStore,
    pub exported: ExportedKeys,
    generator: GeneratorSlot,
}

impl AppState {
    /// Open the document and exported-key file; the generator is set up on a
    /// separate task and joined on first use
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let generator_config = config.generator.clone();
        let handle = tokio::spawn(async move { build_generator(&generator_config) });

        let store = EntryStore::open(&config.store.document)
            .with_context(|| format!("Failed to open {}", config.store.document))?;
        let exported = ExportedKeys::load(&config.store.exported)?;

        tracing::info!(
            "Loaded {} entries from {} ({} exported)",
            store.len(),
            config.store.document,
            exported.len()
        );

        Ok(Self {
            config,
            store,
            exported,
            generator: GeneratorSlot::Starting(handle),
        })
    }

    /// State over already-opened parts, with a ready generator
    pub fn with_generator(
        config: Config,
        store: EntryStore,
        exported: ExportedKeys,
        generator: Option<SharedGenerator>,
    ) -> Self {
        Self {
            config,
            store,
            exported,
            generator: GeneratorSlot::Ready(generator),
        }
    }

    pub async fn generator(&mut self) -> anyhow::Result<SharedGenerator> {
        if let GeneratorSlot::Starting(handle) = &mut self.generator {
            let built = handle.await.context("Generator setup task failed")?;
            self.generator = GeneratorSlot::Ready(built);
        }

        match &self.generator {
            GeneratorSlot::Ready(Some(generator)) => Ok(Arc::clone(generator)),
            _ => anyhow::bail!(
                "No generator available; set ANTHROPIC_API_KEY or generator.api_key in the profile"
            ),
        }
    }
}

fn build_generator(config: &GeneratorConfig) -> Option<SharedGenerator> {
    if !config.enabled {
        tracing::warn!("Generator disabled");
        return None;
    }
    if config.api_key.is_empty() {
        tracing::warn!("No API key configured, generator unavailable");
        return None;
    }

    let generator = FrenchGenerator::new(
        config.api_key.clone(),
        config.api_url.clone(),
        config.model.clone(),
        config.max_tokens,
    );
    let metadata = generator.metadata();
    tracing::info!("Generator ready: {} ({})", metadata.name, metadata.model);

    Some(Arc::new(generator))
}
