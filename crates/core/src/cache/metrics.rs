/// Counters describing the activity of an [`ExpiringStore`](super::ExpiringStore).
///
/// All counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    /// Number of `set` calls.
    pub insertions: u64,
    /// Number of `get` calls that returned a value.
    pub hits: u64,
    /// Number of `get` calls that found nothing or an expired entry.
    pub misses: u64,
    /// Number of entries removed by the background sweep.
    pub evictions: u64,
}
