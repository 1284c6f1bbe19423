//! The retrieval core: two ranking modes over a filtered record pool.

pub mod literal;
pub mod query;
pub mod result;
pub mod semantic;


use crate::embedding::EmbeddingError;
use thiserror::Error;

pub use query::{RankingMode, SearchQuery};
pub use result::ScoredMatch;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("Record serial {serial} in ward {ward} has no embedding")]
    MissingEmbedding { serial: u32, ward: String },
    #[error("Embedding dimension mismatch: query has {expected}, record has {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
