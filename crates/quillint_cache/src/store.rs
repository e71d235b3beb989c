//! On-disk cache store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::{CacheError, CacheRecord, hash_hex, stable_hash};

/// Sequence for process-unique temporary file names. Two writers in the
/// same process must not share a temp path.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Outcome of a cache lookup.
///
/// `Corrupted` is distinguished from a plain miss so callers can log and
/// recompute instead of silently using garbage or aborting the run.
#[derive(Debug)]
pub enum CacheLookup {
    /// A valid record was found.
    Hit(Box<CacheRecord>),
    /// No record exists for this file.
    Miss,
    /// A record exists but failed to parse.
    Corrupted(String),
}

/// Stores one cache record per distinct file identity.
///
/// Records are keyed by `stable_hash(file identity)` rather than the raw
/// path, so record names are filesystem-safe and stable across path
/// representations. Saves are atomic: concurrent, uncoordinated writers
/// across files or overlapping runs never corrupt a record.
#[derive(Debug)]
pub struct CacheStore {
    /// Directory where records are stored.
    cache_dir: PathBuf,
    /// Whether caching is enabled.
    enabled: bool,
}

impl CacheStore {
    /// Creates a new store rooted at `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            enabled: true,
        }
    }

    /// Disables caching; `load` always misses and `save` becomes a no-op.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Returns whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the record path for a file identity.
    pub fn record_path(&self, file_identity: &str) -> Result<PathBuf, CacheError> {
        let key = stable_hash(&file_identity)?;
        Ok(self.path_for_key(key))
    }

    fn path_for_key(&self, key: u64) -> PathBuf {
        self.cache_dir.join(format!("{}.json", hash_hex(key)))
    }

    /// Loads the record for a file identity.
    pub fn load(&self, file_identity: &str) -> Result<CacheLookup, CacheError> {
        if !self.enabled {
            return Ok(CacheLookup::Miss);
        }

        let path = self.record_path(file_identity)?;
        if !path.exists() {
            debug!("No cache record for {}", file_identity);
            return Ok(CacheLookup::Miss);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| CacheError::read(format!("{}: {}", path.display(), e)))?;

        match serde_json::from_str::<CacheRecord>(&content) {
            Ok(record) => Ok(CacheLookup::Hit(Box::new(record))),
            Err(e) => {
                warn!("Corrupted cache record {}: {}", path.display(), e);
                Ok(CacheLookup::Corrupted(e.to_string()))
            }
        }
    }

    /// Saves a record atomically.
    ///
    /// The record is written to a process-unique temporary file in the cache
    /// directory, then renamed over the target. A failure never leaves a
    /// half-written record at the canonical path, and the temporary file is
    /// cleaned up on failure. Under concurrent writers to the same key, the
    /// last rename to complete wins cleanly.
    pub fn save(&self, record: &CacheRecord) -> Result<(), CacheError> {
        if !self.enabled {
            return Ok(());
        }

        fs::create_dir_all(&self.cache_dir)?;

        let target = self.path_for_key(record.file_hash);
        let temp = self.cache_dir.join(format!(
            "{}.{}.{}.tmp",
            hash_hex(record.file_hash),
            std::process::id(),
            TEMP_SEQ.fetch_add(1, Ordering::Relaxed),
        ));

        let content = serde_json::to_string_pretty(record)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;

        if let Err(e) = fs::write(&temp, content) {
            let _ = fs::remove_file(&temp);
            return Err(CacheError::write(format!("{}: {}", temp.display(), e)));
        }

        if let Err(e) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(CacheError::write(format!("{}: {}", target.display(), e)));
        }

        debug!("Saved cache record to {}", target.display());
        Ok(())
    }

    /// Removes the record for a file identity, if present.
    pub fn remove(&self, file_identity: &str) -> Result<(), CacheError> {
        let path = self.record_path(file_identity)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Removes every record in the cache directory.
    pub fn clear(&self) -> Result<(), CacheError> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }

    /// Returns the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
