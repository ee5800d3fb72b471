//! Reset use case: drop all mood data, keep settings

use crate::error::Result;
use crate::infrastructure::MoodRepository;

/// Remove every stored entry. Returns how many were removed.
pub fn reset<R: MoodRepository>(repository: &R) -> Result<usize> {
    let removed = repository.load_entries().map(|e| e.len()).unwrap_or(0);
    repository.clear_entries()?;
    tracing::info!(removed, "all mood data cleared");
    Ok(removed)
}
