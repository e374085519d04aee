//! Prometheus export of the cache statistics.

use std::sync::Arc;

use prometheus::core::{Collector, Desc, Describer};
use prometheus::proto::MetricFamily;
use prometheus::{IntCounter, IntGauge, Opts, Registry, TextEncoder};

use elphi_calendar_core::cache::CacheStats;

use crate::resolver::CachedResolver;

/// Label value of the event metadata store.
pub const EVENTS_CACHE: &str = "events";
/// Label value of the schedule store.
pub const SCHEDULE_CACHE: &str = "schedule";

const SIZE: (&str, &str) = ("merkliste_cache_size", "Number of entries in the cache");
const COUNTERS: [(&str, &str); 4] = [
    ("merkliste_cache_insertions", "Cache insertions"),
    ("merkliste_cache_hits", "Cache hits"),
    ("merkliste_cache_misses", "Cache misses"),
    (
        "merkliste_cache_evictions",
        "Expired entries removed from the cache",
    ),
];

/// Exposes the [`CacheStats`] of one store, read at scrape time.
///
/// Every series carries the constant label `cache`.
pub struct StoreCollector {
    cache: String,
    store: Arc<dyn CacheStats>,
    descs: Vec<Desc>,
}

impl StoreCollector {
    pub fn new(cache: &str, store: Arc<dyn CacheStats>) -> Result<Self, prometheus::Error> {
        let descs = std::iter::once(SIZE)
            .chain(COUNTERS)
            .map(|(name, help)| opts(cache, name, help).describe())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            cache: cache.to_string(),
            store,
            descs,
        })
    }
}

impl Collector for StoreCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.descs.iter().collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let metrics = self.store.metrics();
        let values = [
            metrics.insertions,
            metrics.hits,
            metrics.misses,
            metrics.evictions,
        ];
        let mut families = Vec::with_capacity(self.descs.len());

        let (name, help) = SIZE;
        match IntGauge::with_opts(opts(&self.cache, name, help)) {
            Ok(gauge) => {
                gauge.set(i64::try_from(self.store.len()).unwrap_or(i64::MAX));
                families.extend(gauge.collect());
            }
            Err(err) => tracing::warn!(cache = %self.cache, error = %err, "Skipping {name}"),
        }

        for ((name, help), value) in COUNTERS.into_iter().zip(values) {
            match IntCounter::with_opts(opts(&self.cache, name, help)) {
                Ok(counter) => {
                    counter.inc_by(value);
                    families.extend(counter.collect());
                }
                Err(err) => tracing::warn!(cache = %self.cache, error = %err, "Skipping {name}"),
            }
        }
        families
    }
}

fn opts(cache: &str, name: &str, help: &str) -> Opts {
    Opts::new(name, help).const_label("cache", cache)
}

/// Registers one collector per store of `resolver`.
pub fn register_caches(
    registry: &Registry,
    resolver: &CachedResolver,
) -> Result<(), prometheus::Error> {
    registry.register(Box::new(StoreCollector::new(
        EVENTS_CACHE,
        Arc::new(resolver.event_store().clone()),
    )?))?;
    registry.register(Box::new(StoreCollector::new(
        SCHEDULE_CACHE,
        Arc::new(resolver.schedule_store().clone()),
    )?))
}

/// Renders everything in `registry` in the text exposition format.
pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    TextEncoder::new().encode_to_string(&registry.gather())
}
