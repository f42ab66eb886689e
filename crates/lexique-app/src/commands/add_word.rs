use std::time::Duration;

use anyhow::Context;
use lexique_core::input::validate_headword;
use lexique_core::{AddOutcome, DuplicateAction};
use lexique_lang_french::parse_response;

use crate::state::AppState;

/// Generate an entry for `word` and store it.
///
/// A duplicate is resolved with `on_duplicate` before any generation request
/// is made; only `Force` goes on to replace the stored entry.
pub async fn handle_add_word(
    state: &mut AppState,
    word: &str,
    on_duplicate: DuplicateAction,
    accept_spelling: bool,
) -> anyhow::Result<AddOutcome> {
    let word = validate_headword(word, state.config.store.max_headword_len)?.to_string();

    if let Some(existing) = state.store.get(&word) {
        match on_duplicate {
            DuplicateAction::Skip => {
                tracing::info!("'{}' already stored as '{}'", word, existing.headword);
                return Ok(AddOutcome::Skipped {
                    existing: existing.headword.clone(),
                });
            }
            DuplicateAction::View => return Ok(AddOutcome::Viewed(existing.clone())),
            DuplicateAction::Force => {
                tracing::info!("Regenerating existing entry '{}'", existing.headword)
            }
        }
    }

    let generator = state.generator().await?;
    let limit = Duration::from_secs(state.config.timeout_seconds);

    tracing::info!("Requesting entry for '{}'", word);
    let raw = tokio::time::timeout(limit, generator.generate(&word))
        .await
        .with_context(|| format!("Generation for '{word}' timed out after {}s", limit.as_secs()))?
        .with_context(|| format!("Generation failed for '{word}'"))?;

    let draft = parse_response(&raw);
    let headword = match draft.spelling_correction(&word) {
        Some(corrected) if accept_spelling => {
            tracing::info!("Using corrected spelling '{}' for '{}'", corrected, word);
            corrected.to_string()
        }
        Some(corrected) => {
            tracing::warn!(
                "Generator suggests '{}' for '{}', keeping the input spelling",
                corrected,
                word
            );
            word.clone()
        }
        None => word.clone(),
    };

    let record = draft.into_record(&headword);
    let outcome = state.store.add(record, |_| on_duplicate)?;
    Ok(outcome)
}
