use std::fmt::Write;

use clap::{Subcommand, ValueEnum};
use lexique_core::{AddOutcome, DuplicateAction, Record};

use crate::state::AppState;

pub mod add_word;
pub mod browse;
pub mod export_deck;
pub mod maintenance;

use add_word::handle_add_word;
use browse::{handle_count, handle_search, handle_show};
use export_deck::handle_export;
use maintenance::handle_resort;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an entry for a word or short expression and store it
    Add {
        word: String,
        /// What to do when the word is already stored
        #[arg(long, value_enum, default_value_t = OnDuplicate::Skip)]
        on_duplicate: OnDuplicate,
        /// Store the entry under the generator's corrected spelling
        #[arg(long)]
        accept_spelling: bool,
    },
    /// Sort the document's entries alphabetically
    Resort,
    /// Count entries in the document
    Count,
    /// List entries whose headword starts with a prefix, accents ignored
    Search { prefix: String },
    /// Display one entry
    Show { word: String },
    /// Export entries not yet exported to a flashcard deck
    Export {
        /// Deck name, overriding the profile
        #[arg(long)]
        deck: Option<String>,
        /// Send notes to a running Anki through AnkiConnect
        #[arg(long)]
        connect: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnDuplicate {
    Skip,
    View,
    Force,
}

impl From<OnDuplicate> for DuplicateAction {
    fn from(choice: OnDuplicate) -> Self {
        match choice {
            OnDuplicate::Skip => DuplicateAction::Skip,
            OnDuplicate::View => DuplicateAction::View,
            OnDuplicate::Force => DuplicateAction::Force,
        }
    }
}

pub async fn run(state: &mut AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add {
            word,
            on_duplicate,
            accept_spelling,
        } => {
            let outcome =
                handle_add_word(state, &word, on_duplicate.into(), accept_spelling).await?;
            match outcome {
                AddOutcome::Inserted => println!("Added '{}'", word.trim()),
                AddOutcome::Replaced { previous } => {
                    println!("Replaced existing entry '{}'", previous.headword)
                }
                AddOutcome::Skipped { existing } => {
                    println!("'{}' is already stored as '{}', skipped", word.trim(), existing)
                }
                AddOutcome::Viewed(existing) => print!("{}", render_record(&existing)),
            }
        }
        Command::Resort => {
            let count = handle_resort(state)?;
            println!("Sorted {count} entries");
        }
        Command::Count => println!("{}", handle_count(state)?),
        Command::Search { prefix } => {
            for record in handle_search(state, &prefix) {
                println!("{}\t{}", record.headword, record.word_type);
            }
        }
        Command::Show { word } => match handle_show(state, &word) {
            Some(record) => print!("{}", render_record(record)),
            None => println!("No entry for '{}'", word.trim()),
        },
        Command::Export { deck, connect } => {
            let exported = handle_export(state, deck, connect).await?;
            println!("Exported {exported} new entries");
        }
    }

    Ok(())
}

/// Plain-text view of one record
pub fn render_record(record: &Record) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", record.headword, record.word_type);
    let _ = writeln!(out, "Definitions:");
    for definition in &record.definitions {
        let _ = writeln!(out, "  • {definition}");
    }
    if !record.examples.is_empty() {
        let _ = writeln!(out, "Examples:");
        for example in &record.examples {
            let _ = writeln!(out, "  • {}", example.source);
            if !example.translation.is_empty() {
                let _ = writeln!(out, "    ({})", example.translation);
            }
        }
    }
    out
}
