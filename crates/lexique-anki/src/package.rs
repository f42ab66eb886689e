use std::collections::BTreeSet;
use std::fmt::Write;

use lexique_core::normalize;
use lexique_types::Record;

use crate::card::Card;

/// Result of one export call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Export {
    pub package: Vec<u8>,
    /// Keys of the records written to `package`
    pub newly_exported: BTreeSet<String>,
}

/// Flashcard export interface
pub trait Exporter {
    /// Package every record whose key is not in `already_exported`
    fn export(
        &self,
        records: &[Record],
        already_exported: &BTreeSet<String>,
    ) -> anyhow::Result<Export>;
}

/// Anki plain-text import package, one tab-separated note per line
#[derive(Debug, Clone)]
pub struct TextPackage {
    pub deck: String,
    pub model: String,
    pub tags: Vec<String>,
}

impl TextPackage {
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            deck: deck.into(),
            model: model.into(),
            tags: vec!["lexique".to_string()],
        }
    }

    /// File name the package is usually written to
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.deck)
    }

    fn header(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#separator:tab");
        let _ = writeln!(out, "#html:true");
        let _ = writeln!(out, "#notetype:{}", self.model);
        let _ = writeln!(out, "#deck:{}", self.deck);
        let _ = writeln!(out, "#tags:{}", self.tags.join(" "));
        let _ = writeln!(out, "#columns:{}", Card::FIELDS.join("\t"));
        out
    }
}

impl Exporter for TextPackage {
    fn export(
        &self,
        records: &[Record],
        already_exported: &BTreeSet<String>,
    ) -> anyhow::Result<Export> {
        let mut package = self.header();
        let mut newly_exported = BTreeSet::new();

        for record in records {
            let key = normalize(&record.headword);
            if already_exported.contains(&key) || newly_exported.contains(&key) {
                continue;
            }

            let card = Card::from_record(record);
            let line = card
                .values()
                .map(|value| value.replace(['\t', '\n', '\r'], " "))
                .join("\t");
            package.push_str(&line);
            package.push('\n');
            newly_exported.insert(key);
        }

        tracing::info!(
            "Packaged {} new notes for deck '{}' ({} already exported)",
            newly_exported.len(),
            self.deck,
            already_exported.len()
        );

        Ok(Export {
            package: package.into_bytes(),
            newly_exported,
        })
    }
}
