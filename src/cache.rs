//! Memoization of parse results keyed by the exact input text
//!
//! By default the cache is unbounded: entries are never evicted or
//! invalidated. Setting [`CacheConfig::capacity`] switches to LRU eviction
//! for bounded memory usage without changing what callers observe.
//!
//! # Thread Safety
//!
//! The store sits behind a `parking_lot::Mutex`; lookups and inserts may
//! come from any thread. Cached documents are handed out as `Arc<Document>`
//! and are never mutated in place.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use parking_lot::Mutex;

use crate::core::Document;

/// Cache configuration options
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether parse results are memoized at all
    pub enabled: bool,
    /// Maximum number of entries; `None` keeps every entry
    pub capacity: Option<NonZeroUsize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: None,
        }
    }
}

impl CacheConfig {
    /// Bounded cache evicting the least recently used entry
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            enabled: true,
            capacity: Some(capacity),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            capacity: None,
        }
    }
}

/// Point-in-time counters for a [`ParseCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: Option<NonZeroUsize>,
}

enum Store {
    Unbounded(HashMap<String, Arc<Document>>),
    Bounded(LruCache<String, Arc<Document>>),
}

/// Concurrent map from raw input text to the document parsed from it
pub struct ParseCache {
    config: CacheConfig,
    store: Mutex<Store>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ParseCache {
    pub fn new(config: CacheConfig) -> Self {
        let store = match config.capacity {
            Some(capacity) => {
                debug!("Creating parse cache with LRU capacity {}", capacity);
                Store::Bounded(LruCache::new(capacity))
            }
            None => Store::Unbounded(HashMap::new()),
        };

        Self {
            config,
            store: Mutex::new(store),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up the document previously stored for `input`
    pub fn get(&self, input: &str) -> Option<Arc<Document>> {
        if !self.config.enabled {
            return None;
        }

        let found = match &mut *self.store.lock() {
            Store::Unbounded(map) => map.get(input).cloned(),
            Store::Bounded(lru) => lru.get(input).cloned(),
        };

        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a document under its exact input text
    pub fn insert(&self, input: String, document: Arc<Document>) {
        if !self.config.enabled {
            return;
        }

        match &mut *self.store.lock() {
            Store::Unbounded(map) => {
                map.insert(input, document);
            }
            Store::Bounded(lru) => {
                lru.put(input, document);
            }
        }
    }

    pub fn len(&self) -> usize {
        match &*self.store.lock() {
            Store::Unbounded(map) => map.len(),
            Store::Bounded(lru) => lru.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        match &mut *self.store.lock() {
            Store::Unbounded(map) => map.clear(),
            Store::Bounded(lru) => lru.clear(),
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.config.capacity,
        }
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
