//! In-memory store with TTL anchored at insertion.
//!
//! Expired entries are invisible to `get` immediately (lazy expiry) and are
//! physically removed by the background sweep started with
//! [`MemoryStore::start_sweep`].

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Notify;
use tokio::time::Instant;

use elphi_calendar_core::cache::{CacheMetrics, CacheStats, ExpiringStore};

use super::SweepHandle;

/// A single cache entry.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Returns true if this entry has expired at `now`.
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub(super) struct Inner<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    insertions: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    /// Wakes the sweep when a new deadline may have appeared.
    pub(super) inserted: Notify,
}

impl<K, V> Inner<K, V>
where
    K: Eq + Hash,
{
    /// Earliest expiry deadline of all stored entries.
    pub(super) fn next_deadline(&self) -> Option<Instant> {
        self.entries.read().values().map(|e| e.expires_at).min()
    }

    /// Removes all expired entries and counts them as evictions.
    pub(super) fn remove_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        drop(entries);

        self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }
}

/// Thread-safe in-memory [`ExpiringStore`].
///
/// Cloning is cheap and yields a handle to the same store. Every entry lives
/// for exactly the store's TTL after its last `set`; reads never extend it.
pub struct MemoryStore<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for MemoryStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> fmt::Debug for MemoryStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("ttl", &self.inner.ttl)
            .field("entries", &self.inner.entries.read().len())
            .finish()
    }
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty store whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: RwLock::new(HashMap::new()),
                ttl,
                insertions: AtomicU64::new(0),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
                evictions: AtomicU64::new(0),
                inserted: Notify::new(),
            }),
        }
    }

    /// Starts the background sweep on the current tokio runtime.
    ///
    /// The sweep runs until the returned handle is stopped or dropped.
    pub fn start_sweep(&self) -> SweepHandle {
        SweepHandle::spawn(Arc::clone(&self.inner))
    }
}

impl<K, V> CacheStats for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    fn len(&self) -> usize {
        let now = Instant::now();
        self.inner
            .entries
            .read()
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            insertions: self.inner.insertions.load(Ordering::Relaxed),
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
            evictions: self.inner.evictions.load(Ordering::Relaxed),
        }
    }
}

impl<K, V> ExpiringStore<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let value = self
            .inner
            .entries
            .read()
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone());

        let counter = if value.is_some() {
            &self.inner.hits
        } else {
            &self.inner.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }

    fn set(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.inner.ttl,
        };
        self.inner.entries.write().insert(key, entry);
        self.inner.insertions.fetch_add(1, Ordering::Relaxed);
        self.inner.inserted.notify_one();
    }
}
