use std::path::{Path, PathBuf};
use std::sync::Arc;

use mzansi_core::KnowledgeBase;
use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Why a dataset load failed. Used for log granularity only; load failures
/// are never surfaced to lookup callers.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed reading dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed parsing dataset at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Summary of the store's current state, for status output.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub loaded: bool,
    pub routes: usize,
    pub cities: usize,
    pub ranks: usize,
    pub safety_categories: usize,
}

/// Owns the immutable taxi dataset and its load state.
///
/// The dataset lives behind an `RwLock<Option<Arc<_>>>`: lookups clone the
/// `Arc` under the read lock and keep working against that snapshot, so a
/// concurrent `reload` swaps in a fully-new dataset without torn reads.
pub struct KnowledgeStore {
    path: PathBuf,
    data: RwLock<Option<Arc<KnowledgeBase>>>,
}

impl KnowledgeStore {
    /// Creates a store backed by the document at `path` and performs the
    /// initial load.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self {
            path: path.into(),
            data: RwLock::new(None),
        };
        store.load();
        store
    }

    /// Reads and parses the dataset document, replacing the snapshot
    /// wholesale. On failure the store ends up unloaded; the error is
    /// logged, never returned.
    pub fn load(&self) {
        match read_document(&self.path) {
            Ok(base) => {
                info!(
                    path = %self.path.display(),
                    routes = base.routes.len(),
                    cities = base.taxi_ranks.len(),
                    "taxi knowledge base loaded"
                );
                *self.data.write() = Some(Arc::new(base));
            }
            Err(err) => {
                error!(path = %self.path.display(), error = %err, "failed loading taxi knowledge base");
                *self.data.write() = None;
            }
        }
    }

    /// Re-reads the document and fully replaces the dataset. There is no
    /// partial update path.
    pub fn reload(&self) {
        self.load();
    }

    pub fn is_loaded(&self) -> bool {
        self.data.read().is_some()
    }

    /// The current dataset, if any. Callers hold the returned `Arc` for the
    /// duration of one operation and see either the fully-old or fully-new
    /// dataset across a reload, never a mix.
    pub fn snapshot(&self) -> Option<Arc<KnowledgeBase>> {
        self.data.read().clone()
    }

    pub fn status(&self) -> StoreStatus {
        match self.snapshot() {
            Some(base) => StoreStatus {
                loaded: true,
                routes: base.routes.len(),
                cities: base.taxi_ranks.len(),
                ranks: base.taxi_ranks.values().map(Vec::len).sum(),
                safety_categories: base.safety_guidelines.len(),
            },
            None => StoreStatus {
                loaded: false,
                routes: 0,
                cities: 0,
                ranks: 0,
                safety_categories: 0,
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn preloaded(base: KnowledgeBase) -> Self {
        Self {
            path: PathBuf::from("<in-memory>"),
            data: RwLock::new(Some(Arc::new(base))),
        }
    }
}

fn read_document(path: &Path) -> Result<KnowledgeBase, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
