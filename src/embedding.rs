//! Embedding provider seam: converts free text into a fixed-length vector.
//!
//! The crate never computes embeddings itself; record vectors arrive
//! precomputed in the partition documents and query vectors come from
//! whatever model the host application wires in behind this trait.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding extraction failed: {reason}")]
    EmbeddingFailed { reason: String },
    #[error("Invalid input: {details}")]
    InvalidInput { details: String },
    #[error("Engine is not loaded or has been disposed")]
    EngineNotLoaded,
}

/// An opaque sentence-embedding capability. Must be deterministic within a
/// session: equal input text yields a vector with cosine 1 against itself.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed one text into a vector of `dimension()` floats.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Fixed output dimensionality.
    fn dimension(&self) -> usize;
}
