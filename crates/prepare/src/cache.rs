//! Memoized preparation of targets and queries.
//!
//! Preparing a string (lower-casing, and for targets the boundary table) is
//! cheap but not free, and the same trigger words are matched against many
//! messages. [`PreparedCache`] keeps prepared values keyed by the exact input
//! string. It is an explicit object rather than process-wide state: callers
//! own it, share it through an `Arc`, and decide when to clear it.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;
use serde::Serialize;
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::prepared::{PreparedQuery, PreparedTarget};

type Map<T> = Mutex<LruCache<String, Arc<T>>>;

/// Counters describing how the cache has been used since creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Lookups that skipped the cache because the string was too long.
    pub bypassed: u64,
    pub targets: usize,
    pub queries: usize,
}

/// Bounded, thread-safe cache of [`PreparedTarget`] and [`PreparedQuery`]
/// values.
///
/// Each map is guarded by its own mutex, held only for the lookup and the
/// insert. Preparation runs outside the lock, so two threads racing on the
/// same new string may both prepare it; the first insert wins and both get
/// equal values.
pub struct PreparedCache {
    cfg: CacheConfig,
    targets: Map<PreparedTarget>,
    queries: Map<PreparedQuery>,
    hits: AtomicU64,
    misses: AtomicU64,
    bypassed: AtomicU64,
}

impl PreparedCache {
    pub fn new(cfg: CacheConfig) -> Result<Self, CacheError> {
        cfg.validate()?;
        let capacity = NonZeroUsize::new(cfg.capacity).ok_or_else(|| {
            CacheError::InvalidConfig("capacity must be greater than zero".into())
        })?;
        Ok(Self::with_capacity(cfg, capacity))
    }

    fn with_capacity(cfg: CacheConfig, capacity: NonZeroUsize) -> Self {
        Self {
            cfg,
            targets: Mutex::new(LruCache::new(capacity)),
            queries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            bypassed: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.cfg
    }

    /// Prepared target for `raw`, from the cache when possible.
    pub fn target(&self, raw: &str) -> Arc<PreparedTarget> {
        self.get_or_prepare(&self.targets, raw, |raw| PreparedTarget::new(raw))
    }

    /// Prepared query for `raw`, from the cache when possible.
    pub fn query(&self, raw: &str) -> Arc<PreparedQuery> {
        self.get_or_prepare(&self.queries, raw, |raw| PreparedQuery::new(raw))
    }

    /// Drops every cached target and query. Counters are kept.
    pub fn clear(&self) {
        let mut targets = lock(&self.targets);
        let mut queries = lock(&self.queries);
        let evicted = targets.len() + queries.len();
        targets.clear();
        queries.clear();
        debug!(evicted, "cache_cleared");
    }

    /// Total number of cached entries across both maps.
    pub fn len(&self) -> usize {
        lock(&self.targets).len() + lock(&self.queries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            bypassed: self.bypassed.load(Ordering::Relaxed),
            targets: lock(&self.targets).len(),
            queries: lock(&self.queries).len(),
        }
    }

    fn get_or_prepare<T, F>(&self, map: &Map<T>, raw: &str, prepare: F) -> Arc<T>
    where
        F: Fn(&str) -> T,
    {
        if self.exceeds_limit(raw) {
            self.bypassed.fetch_add(1, Ordering::Relaxed);
            return Arc::new(prepare(raw));
        }

        if let Some(hit) = lock(map).get(raw).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let fresh = Arc::new(prepare(raw));
        let mut guard = lock(map);
        Arc::clone(guard.get_or_insert(raw.to_string(), || fresh))
    }

    fn exceeds_limit(&self, raw: &str) -> bool {
        // A string is never longer in chars than in bytes.
        raw.len() > self.cfg.max_cached_len && raw.chars().count() > self.cfg.max_cached_len
    }
}

impl Default for PreparedCache {
    fn default() -> Self {
        let cfg = CacheConfig::default();
        let capacity = NonZeroUsize::new(cfg.capacity).expect("Non-zero cache size");
        Self::with_capacity(cfg, capacity)
    }
}

impl std::fmt::Debug for PreparedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedCache")
            .field("cfg", &self.cfg)
            .field("stats", &self.stats())
            .finish()
    }
}

fn lock<T>(map: &Map<T>) -> MutexGuard<'_, LruCache<String, Arc<T>>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
