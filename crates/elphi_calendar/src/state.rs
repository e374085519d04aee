//! Shared application state.

use std::sync::Arc;

use prometheus::Registry;

use crate::metrics::register_caches;
use crate::reporter::ErrorReporter;
use crate::resolver::CachedResolver;

/// Cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<CachedResolver>,
    pub reporter: Arc<dyn ErrorReporter>,
    pub registry: Registry,
}

impl AppState {
    /// Creates the state with a fresh registry exposing both caches.
    pub fn new(
        resolver: CachedResolver,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        register_caches(&registry, &resolver)?;
        Ok(Self {
            resolver: Arc::new(resolver),
            reporter,
            registry,
        })
    }
}
