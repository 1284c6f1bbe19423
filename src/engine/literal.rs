//! Literal ranking: case-folded substring containment, pool order preserved.

use super::result::ScoredMatch;
use crate::roll::PoolEntry;

/// Return the first `k` records whose haystack contains `needle`, in pool
/// order. No scoring; containment is binary. The needle must already be
/// trimmed and non-empty (empty queries short-circuit before reaching here).
pub fn filter(pool: &[&PoolEntry], needle: &str, k: usize) -> Vec<ScoredMatch> {
    let needle = needle.to_lowercase();
    pool.iter()
        .filter(|e| e.haystack().contains(&needle))
        .take(k)
        .map(|e| ScoredMatch {
            record: e.record.clone(),
            score: None,
        })
        .collect()
}
