//! Semantic ranking: cosine similarity against precomputed record vectors.

use super::result::ScoredMatch;
use super::EngineError;
use crate::roll::PoolEntry;

/// Compute cosine(a, b) = dot(a,b) / (||a||·||b||).
///
/// A zero norm product yields 0.0 rather than NaN, so zero vectors score as
/// unrelated and sort last.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut na = 0.0;
    let mut nb = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    let norms = (na.sqrt() * nb.sqrt()).max(f32::EPSILON);
    dot / norms
}

/// Score every record against the query embedding and return the top `k`.
///
/// Sorting is stable and descending, so equal scores keep original pool
/// order. A record without an embedding, or with a different dimensionality
/// than the query, is an invariant violation and fails the whole search.
pub fn rank(
    pool: &[&PoolEntry],
    query_embedding: &[f32],
    k: usize,
) -> Result<Vec<ScoredMatch>, EngineError> {
    let mut scored = Vec::with_capacity(pool.len());
    for entry in pool {
        let embedding = entry
            .record
            .embedding
            .as_deref()
            .ok_or_else(|| EngineError::MissingEmbedding {
                serial: entry.record.serial,
                ward: entry.record.ward.clone(),
            })?;
        if embedding.len() != query_embedding.len() {
            return Err(EngineError::DimensionMismatch {
                expected: query_embedding.len(),
                found: embedding.len(),
            });
        }
        scored.push(ScoredMatch {
            record: entry.record.clone(),
            score: Some(cosine(query_embedding, embedding)),
        });
    }

    scored.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .total_cmp(&a.score.unwrap_or(0.0))
    });
    scored.truncate(k);
    Ok(scored)
}
