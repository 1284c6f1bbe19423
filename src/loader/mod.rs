//! Bulk partition loading: sequential fetches, per-partition failure
//! tolerance, document-level field denormalization.

pub mod cache;
pub mod http;

use crate::config::Config;
use crate::roll::{PartitionKey, PoolEntry, WardDocument};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub use cache::{DiskCache, RollCache};
pub use http::HttpSource;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Fetch failed: {0}")]
    Fetch(String),
    #[error("Partition document malformed: {0}")]
    Malformed(String),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Where partition documents come from. The HTTP implementation is the real
/// one; tests substitute in-memory sources.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoaderError>;
}

/// One skipped partition and why.
#[derive(Debug)]
pub struct PartitionFailure {
    pub key: PartitionKey,
    pub reason: String,
}

/// Outcome of a full load: how much arrived, what was skipped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub partitions_loaded: usize,
    pub records: usize,
    pub failures: Vec<PartitionFailure>,
}

/// Fetch every (language, ward) partition in sequence. A failed partition is
/// logged and recorded, never fatal; the returned entries are the union of
/// whatever succeeded, in fetch order.
#[instrument(skip(source, config))]
pub async fn load_all(
    source: &dyn DataSource,
    config: &Config,
) -> (Vec<PoolEntry>, LoadReport) {
    let mut entries = Vec::new();
    let mut report = LoadReport::default();

    for language in &config.languages {
        for ward_no in 1..=config.ward_count {
            let key = PartitionKey::new(language.clone(), ward_no);
            match load_partition(source, &key).await {
                Ok(batch) => {
                    report.partitions_loaded += 1;
                    report.records += batch.len();
                    entries.extend(batch);
                }
                Err(e) => {
                    warn!("skipping {key}: {e}");
                    report.failures.push(PartitionFailure {
                        key,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        "loaded {} records from {} partitions ({} skipped)",
        report.records,
        report.partitions_loaded,
        report.failures.len()
    );
    (entries, report)
}

/// Fetch and decode one partition, denormalizing the document-level ward and
/// polling station onto each record.
async fn load_partition(
    source: &dyn DataSource,
    key: &PartitionKey,
) -> Result<Vec<PoolEntry>, LoaderError> {
    let raw = source.fetch(&key.path()).await?;
    let WardDocument {
        ward,
        polling_station,
        voters,
    } = serde_json::from_slice(&raw).map_err(|e| LoaderError::Malformed(e.to_string()))?;

    let ward = ward.unwrap_or_else(|| key.ward_no.to_string());
    Ok(voters
        .into_iter()
        .map(|mut record| {
            if record.ward.is_empty() {
                record.ward = ward.clone();
            }
            if record.polling_station.is_empty() {
                record.polling_station = polling_station.clone();
            }
            PoolEntry::new(record, key.language.clone())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    struct MapSource {
        docs: HashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl DataSource for MapSource {
        async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoaderError> {
            self.docs
                .get(path)
                .cloned()
                .ok_or_else(|| LoaderError::Fetch(format!("{path} returned 404")))
        }
    }

    fn ward_doc(ward: &str, names: &[&str]) -> Vec<u8> {
        let voters: Vec<serde_json::Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({
                    "serial": i as u32 + 1,
                    "name": name,
                    "guardian": "Raman",
                    "house_no": "1",
                    "house_name": "Nivas",
                    "gender": "M",
                    "age": 40,
                    "id": format!("KL{i}")
                })
            })
            .collect();
        serde_json::to_vec(&serde_json::json!({
            "ward": ward,
            "polling_station": "GHS Main",
            "voters": voters
        }))
        .unwrap()
    }

    fn small_config() -> Config {
        Config {
            languages: vec!["english".to_string()],
            ward_count: 3,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_partition_is_skipped_not_fatal() {
        let mut docs = HashMap::new();
        docs.insert(
            "data/1_english_embedded.json".to_string(),
            ward_doc("1", &["Anil Kumar"]),
        );
        // ward 2 is absent: a 404
        docs.insert(
            "data/3_english_embedded.json".to_string(),
            ward_doc("3", &["Sita Devi", "Ravi Menon"]),
        );
        let source = MapSource { docs };

        let (entries, report) = load_all(&source, &small_config()).await;

        assert_eq!(entries.len(), 3);
        assert_eq!(report.partitions_loaded, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].key.ward_no, 2);
        // ward 1 loaded before the failure is still present
        assert!(entries.iter().any(|e| e.record.name == "Anil Kumar"));
        // ward 3 loaded after the failure is present too
        assert!(entries.iter().any(|e| e.record.name == "Ravi Menon"));
    }

    #[tokio::test]
    async fn document_fields_are_denormalized_onto_records() {
        let mut docs = HashMap::new();
        docs.insert(
            "data/1_english_embedded.json".to_string(),
            ward_doc("Ward One", &["Anil Kumar"]),
        );
        let cfg = Config {
            ward_count: 1,
            ..small_config()
        };
        let (entries, _) = load_all(&MapSource { docs }, &cfg).await;
        assert_eq!(entries[0].record.ward, "Ward One");
        assert_eq!(entries[0].record.polling_station, "GHS Main");
    }

    #[tokio::test]
    async fn absent_polling_station_no_stays_absent() {
        let mut docs = HashMap::new();
        docs.insert(
            "data/1_english_embedded.json".to_string(),
            ward_doc("1", &["Anil Kumar"]),
        );
        let cfg = Config {
            ward_count: 1,
            ..small_config()
        };
        let (entries, _) = load_all(&MapSource { docs }, &cfg).await;
        assert_eq!(entries[0].record.polling_station_no, None);
        // no synthesized number sneaks into the search haystack either:
        // "1" appears only as the real serial and house_no
        let hay = entries[0].haystack();
        assert_eq!(hay.split_whitespace().filter(|t| *t == "1").count(), 2);
    }

    #[tokio::test]
    async fn malformed_partition_counts_as_failure() {
        let mut docs = HashMap::new();
        docs.insert(
            "data/1_english_embedded.json".to_string(),
            b"not json".to_vec(),
        );
        let cfg = Config {
            ward_count: 1,
            ..small_config()
        };
        let (entries, report) = load_all(&MapSource { docs }, &cfg).await;
        assert!(entries.is_empty());
        assert_eq!(report.failures.len(), 1);
    }

    #[tokio::test]
    async fn disk_cache_round_trip_and_clear() {
        let dir = tempdir().unwrap();
        let cache = DiskCache::new(dir.path().join("rolls.json"));

        assert!(cache.read().await.unwrap().is_none());

        let doc: WardDocument =
            serde_json::from_slice(&ward_doc("1", &["Anil Kumar"])).unwrap();
        let entries: Vec<PoolEntry> = doc
            .voters
            .into_iter()
            .map(|r| PoolEntry::new(r, "english"))
            .collect();
        cache.write(&entries).await.unwrap();

        let cached = cache.read().await.unwrap().unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].record.name, "Anil Kumar");
        assert_eq!(cached[0].language, "english");
        // derived haystack is rebuilt on read
        assert!(cached[0].haystack().contains("anil kumar"));

        cache.clear().await.unwrap();
        assert!(cache.read().await.unwrap().is_none());
        // clearing twice is fine
        cache.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_cache_blob_is_a_miss() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rolls.json");
        tokio::fs::write(&path, b"{{{").await.unwrap();
        let cache = DiskCache::new(&path);
        assert!(cache.read().await.unwrap().is_none());
    }
}
