mod metrics;
mod traits;

pub use metrics::CacheMetrics;
pub use traits::{CacheStats, ExpiringStore};
