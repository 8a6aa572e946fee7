//! Directory cache shared between queries
//!
//! Queries that walk the same directories can share a [`DirCache`] so each
//! EditorConfig file is read and parsed once. The cache is safe to share
//! across threads: concurrent queries for the same uncached directory load it
//! once, the others wait for that result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::Result;
use crate::file::File;

/// What a directory holds, as far as EditorConfig is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// The directory has no EditorConfig file.
    Missing,
    /// The directory's parsed EditorConfig file.
    Present(Arc<File>),
}

impl CacheEntry {
    pub fn file(&self) -> Option<&Arc<File>> {
        match self {
            CacheEntry::Missing => None,
            CacheEntry::Present(file) => Some(file),
        }
    }
}

type Slot = Arc<Mutex<Option<CacheEntry>>>;

/// Absolute directory path to [`CacheEntry`], filled lazily.
#[derive(Debug, Default)]
pub struct DirCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl DirCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `dir`, or the result of `load` stored as the entry.
    ///
    /// `load` runs at most once per directory while it keeps succeeding. A
    /// failed load stores nothing and the error is returned.
    pub fn get_or_load<F>(&self, dir: &Path, load: F) -> Result<CacheEntry>
    where
        F: FnOnce() -> Result<CacheEntry>,
    {
        let slot = lock(&self.slots)
            .entry(dir.to_path_buf())
            .or_default()
            .clone();

        let mut entry = lock(&slot);
        if let Some(cached) = entry.as_ref() {
            debug!(dir = %dir.display(), "editorconfig cache hit");
            return Ok(cached.clone());
        }

        debug!(dir = %dir.display(), "editorconfig cache miss");
        let loaded = load()?;
        *entry = Some(loaded.clone());
        Ok(loaded)
    }

    /// The entry for `dir` if it has been loaded.
    pub fn get(&self, dir: &Path) -> Option<CacheEntry> {
        let slot = lock(&self.slots).get(dir).cloned()?;
        let entry = lock(&slot);
        entry.clone()
    }

    /// Number of directories with a loaded entry.
    pub fn len(&self) -> usize {
        lock(&self.slots)
            .values()
            .filter(|slot| lock(slot).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
