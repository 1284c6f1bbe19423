//! Canonical voter record schema and the per-partition document shape.
//!
//! Source variants disagree on field shapes (ward as string vs number, age
//! occasionally non-numeric, per-record vs per-document ward); everything is
//! normalized here into one schema with explicit optional fields.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// One electoral roll entry.
///
/// Guaranteed fields: `serial`, `name`, `guardian`, `house_no`, `house_name`,
/// `gender`, `id`. Variant-specific: `ward` / `polling_station` (may arrive
/// at the document level and get denormalized in by the loader),
/// `polling_station_no`, `age`, `embedding`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterRecord {
    pub serial: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub ward: String,
    #[serde(default)]
    pub polling_station_no: Option<u32>,
    #[serde(default)]
    pub polling_station: String,
    pub name: String,
    #[serde(default)]
    pub guardian: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub house_no: String,
    #[serde(default)]
    pub house_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    pub id: String,
    /// Fixed-dimension sentence embedding of `name + guardian`, present only
    /// in partitions prepared for semantic ranking.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl VoterRecord {
    /// Build the lowercased substring-search haystack. Computed once at load
    /// time and cached on the pool entry, never per query.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<String> = vec![
            self.serial.to_string(),
            self.name.clone(),
            self.guardian.clone(),
            self.house_no.clone(),
            self.house_name.clone(),
            self.id.clone(),
        ];
        if let Some(ps_no) = self.polling_station_no {
            parts.push(ps_no.to_string());
        }
        parts
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One fetched partition document. `district` / `local_body` extras in some
/// variants are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WardDocument {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub ward: Option<String>,
    #[serde(default)]
    pub polling_station: String,
    pub voters: Vec<VoterRecord>,
}

fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

fn opt_string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
    }
    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Str(s)) => Some(s),
        Some(Raw::Num(n)) => Some(n.to_string()),
        None => None,
    })
}

/// Age arrives as a number in most partitions but as free text in a few
/// scraped ones; non-numeric values normalize to None.
fn lenient_age<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }
    match Option::<Raw>::deserialize(de)? {
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Str(s)) => Ok(s.trim().parse().ok()),
        None => Ok(None),
    }
}
