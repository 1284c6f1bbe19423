//! Unified match type returned by both ranking modes.

use crate::roll::VoterRecord;

/// A matched record. Semantic mode carries the cosine score; literal mode is
/// binary containment, so its matches are unscored.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub record: VoterRecord,
    pub score: Option<f32>,
}

impl ScoredMatch {
    /// Score formatted for display: percentage with one decimal place, empty
    /// for unscored (literal) matches.
    pub fn display_score(&self) -> String {
        match self.score {
            Some(s) => format!("{:.1}%", s * 100.0),
            None => String::new(),
        }
    }
}
