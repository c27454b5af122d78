//! Parsed-table cache keyed by source identity.
//!
//! Load-and-parse is the only stage worth memoizing: everything downstream
//! depends on ephemeral filter/selection state and is recomputed per
//! interaction. Each entry is keyed by source path and fingerprinted with
//! blake3 over the file bytes, so an edited file is re-parsed on the next
//! load without an explicit invalidation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::loader::{parse_transactions, LoadError};
use crate::domain::Transaction;

struct CacheEntry {
    fingerprint: String,
    table: Arc<Vec<Transaction>>,
}

/// Cache of parsed transaction tables.
#[derive(Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a transaction table, reusing the cached parse when the file
    /// contents are unchanged.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Vec<Transaction>>, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fingerprint = blake3::hash(&bytes).to_hex().to_string();

        if let Some(entry) = self.entries.get(path) {
            if entry.fingerprint == fingerprint {
                return Ok(Arc::clone(&entry.table));
            }
        }

        let table = Arc::new(parse_transactions(bytes.as_slice())?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                fingerprint,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Drop the cached parse for one source. Returns true if an entry existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Drop every cached parse.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
