use std::sync::LazyLock;

use lexique_types::Record;
use regex::Regex;
use serde::{Deserialize, Serialize};

static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?(\[[^\]]*\])?").expect("valid regex"));

/// Flashcard fields of one record, HTML-ready
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub french: String,
    pub word_type: String,
    pub english: String,
    pub example: String,
}

impl Card {
    pub const FIELDS: [&'static str; 4] = ["French", "Type", "English", "Example"];

    pub fn from_record(record: &Record) -> Self {
        let english = record
            .definitions
            .iter()
            .map(|d| format!("• {}", markup_to_html(d)))
            .collect::<Vec<_>>()
            .join("<br>");

        let example = record
            .examples
            .iter()
            .map(|e| {
                if e.translation.is_empty() {
                    format!("• {}", markup_to_html(&e.source))
                } else {
                    format!(
                        "• {}<br>({})",
                        markup_to_html(&e.source),
                        markup_to_html(&e.translation)
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("<br>");

        Self {
            french: markup_to_html(&record.headword),
            word_type: markup_to_html(&record.word_type),
            english,
            example,
        }
    }

    pub fn values(&self) -> [&str; 4] {
        [&self.french, &self.word_type, &self.english, &self.example]
    }
}

/// Document markup to flashcard HTML: `\\` becomes a line break, command
/// names and grouping braces go, their text stays.
pub fn markup_to_html(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    escaped
        .split(r"\\")
        .map(|part| {
            COMMAND
                .replace_all(part, "")
                .replace(['{', '}'], "")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
