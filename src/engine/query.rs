//! Lightweight search query wrapper.

use crate::roll::ALL_WARDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    /// Cosine similarity over precomputed record embeddings.
    Semantic,
    /// Case-folded substring containment over the record haystack.
    Literal,
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub mode: RankingMode,
    pub language: String,
    pub ward: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, mode: RankingMode, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode,
            language: language.into(),
            ward: ALL_WARDS.to_string(),
        }
    }

    pub fn with_ward(mut self, ward: impl Into<String>) -> Self {
        self.ward = ward.into();
        self
    }

    /// Query text after trimming; empty means "no search, show the pool".
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}
