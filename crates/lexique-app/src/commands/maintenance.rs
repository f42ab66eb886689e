use crate::state::AppState;

/// Re-sort the document and return the number of entries it holds afterwards
pub fn handle_resort(state: &mut AppState) -> anyhow::Result<usize> {
    state.store.resort()?;
    Ok(state.store.count()?)
}
