use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexique_anki::{AnkiConnectClient, Exporter, TextPackage, push_records};
use lexique_core::Record;

use crate::state::AppState;

/// Export every stored entry not exported before, either as a text package
/// next to the document or straight into Anki. Returns how many were new.
pub async fn handle_export(
    state: &mut AppState,
    deck: Option<String>,
    connect: bool,
) -> anyhow::Result<usize> {
    let deck = deck.unwrap_or_else(|| state.config.anki.deck.clone());
    let model = state.config.anki.model.clone();
    let records: Vec<Record> = state.store.records().into_iter().cloned().collect();

    let newly_exported = if connect {
        let client = AnkiConnectClient::new(state.config.anki.url.clone());
        let version = client
            .check_connection()
            .await
            .with_context(|| format!("AnkiConnect not reachable at {}", client.base_url()))?;
        tracing::debug!("AnkiConnect version {}", version);

        push_records(&client, &deck, &model, &records, state.exported.keys()).await?
    } else {
        let exporter = TextPackage::new(&deck, &model);
        let export = exporter.export(&records, state.exported.keys())?;

        if !export.newly_exported.is_empty() {
            let target = package_path(Path::new(&state.config.store.document), &exporter);
            fs::write(&target, &export.package)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::info!("Wrote {}", target.display());
        }
        export.newly_exported
    };

    if newly_exported.is_empty() {
        tracing::info!("Nothing new to export");
        return Ok(0);
    }

    let count = newly_exported.len();
    state.exported.record(newly_exported)?;
    Ok(count)
}

/// The package lands next to the vocabulary document
fn package_path(document: &Path, exporter: &TextPackage) -> PathBuf {
    let name = exporter.file_name();
    match document.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}
