use crate::error::{Result, StoreError};

const MAX_HEADWORD_WORDS: usize = 10;

/// Accept a single word or short expression, returned trimmed
pub fn validate_headword(input: &str, max_len: usize) -> Result<&str> {
    let word = input.trim();

    if word.is_empty() {
        return Err(StoreError::InvalidHeadword("input cannot be empty".into()));
    }
    if word.split_whitespace().count() > MAX_HEADWORD_WORDS {
        return Err(StoreError::InvalidHeadword(format!(
            "enter a single word or short expression (max {MAX_HEADWORD_WORDS} words)"
        )));
    }
    if word.chars().count() > max_len {
        return Err(StoreError::InvalidHeadword(format!(
            "input is too long, limit it to {max_len} characters"
        )));
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_valid_input() {
        assert_eq!(validate_headword("  s'en aller ", 50).unwrap(), "s'en aller");
    }

    #[test]
    fn rejects_empty_long_and_wordy() {
        assert!(validate_headword("   ", 50).is_err());
        assert!(validate_headword(&"é".repeat(51), 50).is_err());
        assert!(validate_headword(&"é".repeat(50), 50).is_ok());
        assert!(validate_headword("a b c d e f g h i j k", 50).is_err());
    }
}
