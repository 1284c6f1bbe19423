//! Partition identity and the canonical source path template.

use std::fmt;

/// Identifies one source document: a ward roll in one language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey {
    pub language: String,
    pub ward_no: u32,
}

impl PartitionKey {
    pub fn new(language: impl Into<String>, ward_no: u32) -> Self {
        Self {
            language: language.into(),
            ward_no,
        }
    }

    /// Relative fetch path: `data/{ward_no}_{language}_embedded.json`.
    pub fn path(&self) -> String {
        format!("data/{}_{}_embedded.json", self.ward_no, self.language)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ward {} ({})", self.ward_no, self.language)
    }
}
