use lexique_core::Record;

use crate::state::AppState;

/// Stored records whose key starts with the normalized `prefix`
pub fn handle_search<'a>(state: &'a AppState, prefix: &str) -> Vec<&'a Record> {
    let found = state.store.search(prefix);
    tracing::debug!("{} entries match '{}'", found.len(), prefix);
    found
}

pub fn handle_show<'a>(state: &'a AppState, word: &str) -> Option<&'a Record> {
    state.store.get(word)
}

/// Record markers in the document on disk
pub fn handle_count(state: &AppState) -> anyhow::Result<usize> {
    Ok(state.store.count()?)
}
