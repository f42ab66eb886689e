mod card;
mod client;
mod exported;
mod package;

pub use card::{Card, markup_to_html};
pub use client::AnkiConnectClient;
pub use exported::ExportedKeys;
pub use package::{Export, Exporter, TextPackage};

use std::collections::BTreeSet;

use anyhow::Result;
use lexique_core::normalize;
use lexique_types::Record;

/// Send every record not yet in `already_exported` to a running Anki through
/// AnkiConnect. Returns the keys of the notes that were added.
pub async fn push_records(
    client: &AnkiConnectClient,
    deck: &str,
    model: &str,
    records: &[Record],
    already_exported: &BTreeSet<String>,
) -> Result<BTreeSet<String>> {
    client.create_deck(deck).await?;

    let mut added = BTreeSet::new();
    for record in records {
        let key = normalize(&record.headword);
        if already_exported.contains(&key) || added.contains(&key) {
            continue;
        }

        match client.add_note(deck, model, &Card::from_record(record)).await {
            Ok(id) => {
                tracing::debug!("Added note {} for '{}'", id, record.headword);
                added.insert(key);
            }
            Err(e) => tracing::warn!("Could not add '{}': {:#}", record.headword, e),
        }
    }

    tracing::info!("Pushed {} notes to deck '{}'", added.len(), deck);
    Ok(added)
}
