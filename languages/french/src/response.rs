use std::sync::LazyLock;

use lexique_types::{Example, Record};
use regex::Regex;

static SPELLING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Correctly Spelt Word:[ \t]*(.*)$").expect("valid regex")
});
static WORD_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Word Type:\s*(.*?)\nDefinitions:").expect("valid regex"));
static DEFINITIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Definitions:(.*?)Examples:").expect("valid regex"));
static LETTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[a-z]\.\s*(.*)$").expect("valid regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*(.*)$").expect("valid regex"));

/// Fields read out of raw generator text, before they become a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Spelling the generator proposes for the requested word, if any
    pub corrected: Option<String>,
    pub word_type: String,
    pub definitions: Vec<String>,
    pub examples: Vec<Example>,
}

impl Draft {
    /// Build the record, headed by `headword`
    pub fn into_record(self, headword: &str) -> Record {
        Record::new(headword, self.word_type, self.definitions, self.examples)
    }

    /// The proposed spelling when it differs from `word` other than by case
    pub fn spelling_correction(&self, word: &str) -> Option<&str> {
        self.corrected
            .as_deref()
            .filter(|corrected| corrected.to_lowercase() != word.trim().to_lowercase())
    }
}

/// Parse the answer to [`crate::entry_prompt`]. Missing sections give an
/// empty list, a missing word type gives `Unknown`.
pub fn parse_response(text: &str) -> Draft {
    let text = text.replace("\r\n", "\n");

    let corrected = SPELLING
        .captures(&text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty());

    let word_type = WORD_TYPE
        .captures(&text)
        .map(|c| strip_brackets(&c[1]))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let definitions: Vec<String> = DEFINITIONS
        .captures(&text)
        .map(|c| {
            LETTERED
                .captures_iter(&c[1])
                .map(|d| strip_brackets(&d[1]))
                .filter(|d| !d.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let examples: Vec<Example> = text
        .split_once("Examples:")
        .map(|(_, rest)| parse_examples(rest))
        .unwrap_or_default();

    tracing::debug!(
        "Parsed response: {} definitions, {} examples",
        definitions.len(),
        examples.len()
    );

    Draft {
        corrected,
        word_type,
        definitions,
        examples,
    }
}

/// A numbered line holds the French sentence; the next non-empty line that is
/// not itself numbered holds its translation.
fn parse_examples(section: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut lines = section.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

    while let Some(line) = lines.next() {
        let Some(source) = NUMBERED.captures(line).map(|c| strip_brackets(&c[1])) else {
            continue;
        };
        let translation = match lines.peek() {
            Some(next) if !NUMBERED.is_match(next) => {
                let translation = strip_brackets(next);
                lines.next();
                translation
            }
            _ => String::new(),
        };
        if !source.is_empty() {
            examples.push(Example::new(source, translation));
        }
    }

    examples
}

fn strip_brackets(text: &str) -> String {
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = "Correctly Spelt Word: Agaçant
Word Type: adjective
Definitions:
a. Annoying, irritating
b. Provoking mild anger
Examples:
1. Ce bruit est vraiment agaçant.
[This noise is really annoying.]
2. Il a une manière agaçante de parler.
He has an irritating way of speaking.
";

    #[test]
    fn reads_every_section() {
        let draft = parse_response(RESPONSE);
        assert_eq!(draft.corrected.as_deref(), Some("Agaçant"));
        assert_eq!(draft.word_type, "adjective");
        assert_eq!(
            draft.definitions,
            vec!["Annoying, irritating", "Provoking mild anger"]
        );
        assert_eq!(
            draft.examples,
            vec![
                Example::new(
                    "Ce bruit est vraiment agaçant.",
                    "This noise is really annoying."
                ),
                Example::new(
                    "Il a une manière agaçante de parler.",
                    "He has an irritating way of speaking."
                ),
            ]
        );
    }

    #[test]
    fn missing_sections_fall_back() {
        let draft = parse_response("I am not sure what you mean.");
        assert_eq!(draft.corrected, None);
        assert_eq!(draft.word_type, "Unknown");
        assert!(draft.definitions.is_empty());
        assert!(draft.examples.is_empty());
    }

    #[test]
    fn example_without_translation() {
        let draft = parse_response("Examples:\n1. Bonjour.\n2. Salut.\nHi.\n");
        assert_eq!(
            draft.examples,
            vec![Example::new("Bonjour.", ""), Example::new("Salut.", "Hi.")]
        );
    }

    #[test]
    fn spelling_correction_ignores_case() {
        let draft = parse_response(RESPONSE);
        assert_eq!(draft.spelling_correction("agaçant"), None);
        assert_eq!(draft.spelling_correction("agacant"), Some("Agaçant"));
    }

    #[test]
    fn draft_becomes_record() {
        let record = parse_response(RESPONSE).into_record("agaçant");
        assert_eq!(record.headword, "Agaçant");
        assert_eq!(record.word_type, "adjective");
        assert_eq!(record.definitions.len(), 2);
    }
}
