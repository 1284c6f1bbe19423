//! Runtime configuration: data source location, partition layout, result caps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the partition documents are served from.
    pub base_url: String,
    /// Language codes to load, one partition set per language.
    pub languages: Vec<String>,
    /// Wards are numbered 1..=ward_count.
    pub ward_count: u32,
    /// Result cap for semantic (cosine) ranking.
    pub semantic_top_k: usize,
    /// Result cap for literal (substring) filtering.
    pub literal_top_k: usize,
    /// Per-request timeout for partition fetches, in seconds.
    pub request_timeout_secs: u64,
    /// File name of the local cache mirror of the loaded rolls.
    pub cache_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            languages: vec!["english".to_string(), "malayalam".to_string()],
            ward_count: 6,
            semantic_top_k: 20,
            literal_top_k: 50,
            request_timeout_secs: 8,
            cache_file: "voter_rolls.json".to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML document, falling back to defaults for missing keys is
    /// not supported; a config file states everything explicitly.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.languages.is_empty() {
            return Err("At least one language is required".to_string());
        }

        if self.ward_count == 0 {
            return Err("Ward count must be > 0".to_string());
        }

        if self.semantic_top_k == 0 || self.literal_top_k == 0 {
            return Err("Result caps must be > 0".to_string());
        }

        Ok(())
    }
}
