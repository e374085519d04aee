use super::CacheMetrics;

/// Read-only statistics of a cache, independent of its key and value types.
pub trait CacheStats: Send + Sync {
    /// Number of entries that have not expired. Best-effort under concurrency.
    fn len(&self) -> usize;

    /// Returns true if no unexpired entry is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the monotonic counters of this cache.
    fn metrics(&self) -> CacheMetrics;
}

/// A key-value store whose entries expire a fixed time after insertion.
///
/// Reading an entry never extends its lifetime. Implementations synchronize
/// internally, so a store can be shared between tasks behind an `Arc`
/// without any caller-side locking.
pub trait ExpiringStore<K, V>: CacheStats {
    /// Returns the value stored for `key` if it has not expired yet.
    ///
    /// Every call counts as exactly one hit or one miss. An entry that is
    /// present but expired is a miss.
    fn get(&self, key: &K) -> Option<V>;

    /// Stores `value` under `key`, resetting the age of that key to zero.
    fn set(&self, key: K, value: V);
}
