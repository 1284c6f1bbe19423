//! Local mirror of the loaded rolls: one JSON blob under one fixed file.
//!
//! Read-through on startup, rewritten after every full load. There is no
//! expiry; staleness is handled only by an explicit `clear`.

use super::LoaderError;
use crate::roll::{PoolEntry, VoterRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Serialized form of one pool entry. The haystack is derived, so only the
/// record and its language go to disk.
#[derive(Debug, Serialize, Deserialize)]
struct CachedEntry {
    language: String,
    record: VoterRecord,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheBlob {
    entries: Vec<CachedEntry>,
}

#[async_trait]
pub trait RollCache: Send + Sync {
    /// Return the cached entry set, or None when no usable blob exists.
    async fn read(&self) -> Result<Option<Vec<PoolEntry>>, LoaderError>;

    /// Replace the blob with the given entry set.
    async fn write(&self, entries: &[PoolEntry]) -> Result<(), LoaderError>;

    /// Drop the blob. Absent entries are not an error.
    async fn clear(&self) -> Result<(), LoaderError>;
}

/// File-backed cache. A corrupt or unreadable blob counts as a miss, never
/// an error; the caller falls through to a network load.
pub struct DiskCache {
    path: PathBuf,
}

impl DiskCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl RollCache for DiskCache {
    async fn read(&self) -> Result<Option<Vec<PoolEntry>>, LoaderError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Ok(None),
        };
        let blob: CacheBlob = match serde_json::from_slice(&raw) {
            Ok(blob) => blob,
            Err(e) => {
                debug!("cache blob unreadable, treating as miss: {e}");
                return Ok(None);
            }
        };
        debug!("cache hit: {} entries", blob.entries.len());
        Ok(Some(
            blob.entries
                .into_iter()
                .map(|c| PoolEntry::new(c.record, c.language))
                .collect(),
        ))
    }

    async fn write(&self, entries: &[PoolEntry]) -> Result<(), LoaderError> {
        let blob = CacheBlob {
            entries: entries
                .iter()
                .map(|e| CachedEntry {
                    language: e.language.clone(),
                    record: e.record.clone(),
                })
                .collect(),
        };
        let raw = serde_json::to_vec(&blob).map_err(|e| LoaderError::Cache(e.to_string()))?;
        fs::write(&self.path, raw)
            .await
            .map_err(|e| LoaderError::Cache(e.to_string()))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), LoaderError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LoaderError::Cache(e.to_string())),
        }
    }
}
