use serde::{Deserialize, Serialize};

/// One vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display form, first letter capitalized
    pub headword: String,
    /// Free-form grammatical category ("noun", "pronominal verb", ...)
    pub word_type: String,
    pub definitions: Vec<String>,
    pub examples: Vec<Example>,
}

/// A usage example and its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub source: String,
    pub translation: String,
}

impl Record {
    pub fn new(
        headword: impl AsRef<str>,
        word_type: impl Into<String>,
        definitions: Vec<String>,
        examples: Vec<Example>,
    ) -> Self {
        Self {
            headword: capitalize(headword.as_ref().trim()),
            word_type: word_type.into(),
            definitions,
            examples,
        }
    }
}

impl Example {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for Example {
    fn from((source, translation): (S, T)) -> Self {
        Self::new(source, translation)
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_keeps_tail() {
        assert_eq!(capitalize("agaçante"), "Agaçante");
        assert_eq!(capitalize("école"), "École");
        assert_eq!(capitalize("New York"), "New York");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn record_new_trims_and_capitalizes() {
        let record = Record::new("  abeille ", "noun", vec!["honey bee".into()], vec![]);
        assert_eq!(record.headword, "Abeille");
    }
}
