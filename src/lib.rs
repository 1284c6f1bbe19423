//! rollcall — electoral roll lookup over ward voter lists.
//!
//! Fetches per-ward voter partitions (JSON), pools them by language and ward,
//! and ranks records against a free-text query either semantically (cosine
//! over precomputed embeddings) or literally (substring over a precomputed
//! haystack). The [`Session`] ties the pieces together; the embedding model
//! and partition transport sit behind traits.

pub mod config;
pub mod embedding;
pub mod engine;
pub mod loader;
pub mod render;
pub mod roll;
pub mod session;

pub use config::Config;
pub use embedding::{Embedder, EmbeddingError};
pub use engine::{RankingMode, ScoredMatch, SearchQuery};
pub use loader::{DataSource, DiskCache, HttpSource, LoadReport, RollCache};
pub use roll::{RecordStore, VoterRecord};
pub use session::{SearchOutcome, Session, SessionError};
