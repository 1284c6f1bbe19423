//! High-level coordinator: load → pool → rank, one query at a time.
//!
//! Searches carry a monotonically increasing sequence number; a search that
//! is no longer the latest by the time its query embedding arrives reports
//! `Stale` instead of applying its results.

use crate::config::Config;
use crate::embedding::Embedder;
use crate::engine::{self, EngineError, RankingMode, ScoredMatch, SearchQuery};
use crate::loader::{self, DataSource, LoadReport, LoaderError, RollCache};
use crate::render::RenderError;
use crate::roll::{RecordStore, VoterRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Load error: {0}")]
    Load(#[from] LoaderError),
    #[error("Search error: {0}")]
    Search(#[from] EngineError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// What a search produced.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Empty query: no search, caller shows the unranked pool.
    ShowAll(Vec<VoterRecord>),
    /// Ranked (semantic) or pool-ordered (literal) matches. Empty is a valid
    /// outcome, distinct from any failure.
    Matches(Vec<ScoredMatch>),
    /// A newer search started while this one awaited the embedder; its
    /// results were discarded.
    Stale,
}

pub struct Session {
    config: Config,
    store: RecordStore,
    source: Box<dyn DataSource>,
    embedder: Arc<dyn Embedder>,
    cache: Option<Box<dyn RollCache>>,
    search_seq: AtomicU64,
}

impl Session {
    pub fn new(
        config: Config,
        source: Box<dyn DataSource>,
        embedder: Arc<dyn Embedder>,
        cache: Option<Box<dyn RollCache>>,
    ) -> Result<Self, SessionError> {
        config.validate().map_err(SessionError::Config)?;
        Ok(Self {
            config,
            store: RecordStore::new(),
            source,
            embedder,
            cache,
            search_seq: AtomicU64::new(0),
        })
    }

    /// Populate the store: cache read-through first, full fetch otherwise.
    /// A successful fetch rewrites the cache blob.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<LoadReport, SessionError> {
        if let Some(cache) = &self.cache {
            if let Some(entries) = cache.read().await? {
                info!("store populated from cache: {} records", entries.len());
                let report = LoadReport {
                    partitions_loaded: 0,
                    records: entries.len(),
                    failures: Vec::new(),
                };
                self.store.replace_all(entries);
                return Ok(report);
            }
        }
        self.refresh().await
    }

    /// Fetch every partition, bypassing the cache, then rewrite the blob.
    /// The cache is a best-effort mirror: a write failure is logged and the
    /// fetched records are kept.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<LoadReport, SessionError> {
        let (entries, report) = loader::load_all(self.source.as_ref(), &self.config).await;
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write(&entries).await {
                warn!("cache write failed, keeping fetched records: {e}");
            }
        }
        self.store.replace_all(entries);
        Ok(report)
    }

    /// Distinct ward names available for a language.
    pub fn wards(&self, language: &str) -> Vec<String> {
        self.store.wards(language)
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Run one query against the current pool.
    #[instrument(skip(self), fields(mode = ?query.mode))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SessionError> {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let pool = self.store.pool(&query.language, &query.ward);

        let needle = query.trimmed();
        if needle.is_empty() {
            return Ok(SearchOutcome::ShowAll(
                pool.iter().map(|e| e.record.clone()).collect(),
            ));
        }

        let matches = match query.mode {
            RankingMode::Literal => {
                engine::literal::filter(&pool, needle, self.config.literal_top_k)
            }
            RankingMode::Semantic => {
                let query_embedding = self
                    .embedder
                    .embed(needle)
                    .await
                    .map_err(EngineError::Embedding)?;
                // The embed await is the only suspension point; anything that
                // started a newer search during it supersedes this one.
                if self.search_seq.load(Ordering::SeqCst) != seq {
                    debug!("discarding stale search results (seq {seq})");
                    return Ok(SearchOutcome::Stale);
                }
                engine::semantic::rank(&pool, &query_embedding, self.config.semantic_top_k)?
            }
        };

        debug!("{} matches", matches.len());
        Ok(SearchOutcome::Matches(matches))
    }
}
