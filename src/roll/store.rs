//! In-memory record store: bulk replace on load, filtered pool views.

use crate::roll::record::VoterRecord;

/// A record plus everything derived from it at load time.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub record: VoterRecord,
    pub language: String,
    haystack: String,
}

impl PoolEntry {
    pub fn new(record: VoterRecord, language: impl Into<String>) -> Self {
        let haystack = record.haystack();
        Self {
            record,
            language: language.into(),
            haystack,
        }
    }

    /// Lowercased concatenated search text, built once at insert.
    pub fn haystack(&self) -> &str {
        &self.haystack
    }
}

/// Sentinel ward value meaning "no ward filter".
pub const ALL_WARDS: &str = "all";

/// Holds every loaded record across languages and wards. Contents are
/// replaced wholesale by each load; entry order is fetch order, nothing
/// canonical.
#[derive(Debug, Default)]
pub struct RecordStore {
    entries: Vec<PoolEntry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop prior contents and install the new entry set.
    pub fn replace_all(&mut self, entries: Vec<PoolEntry>) {
        self.entries = entries;
    }

    /// Read-only view filtered by language and ward. `ward == "all"` skips
    /// the ward filter; language always applies.
    pub fn pool(&self, language: &str, ward: &str) -> Vec<&PoolEntry> {
        self.entries
            .iter()
            .filter(|e| e.language == language)
            .filter(|e| ward == ALL_WARDS || e.record.ward == ward)
            .collect()
    }

    /// Distinct ward names for one language, in insertion order. Drives the
    /// ward selector.
    pub fn wards(&self, language: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for e in self.entries.iter().filter(|e| e.language == language) {
            if !e.record.ward.is_empty() && !seen.contains(&e.record.ward) {
                seen.push(e.record.ward.clone());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }
}
