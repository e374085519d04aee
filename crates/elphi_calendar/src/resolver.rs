//! Cache-backed resolution of favorites into calendar documents.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use elphi_calendar_core::cache::ExpiringStore;
use elphi_calendar_core::calendar::{CalendarDocument, CalendarEntry};
use elphi_calendar_core::upstream::{
    EventRecord, EventSource, FavoritesSource, Result, ScheduleSource,
};

use crate::cache::{MemoryStore, SweepHandle};

/// Event metadata keyed by event id.
pub type EventStore = MemoryStore<String, EventRecord>;
/// Fixed-up schedule entries keyed by event id.
pub type ScheduleStore = MemoryStore<String, CalendarEntry>;

/// Builds calendar documents from the upstream services, memoizing event
/// metadata and schedules for one TTL.
///
/// Favorites are always fetched fresh. Within one build every upstream call
/// is awaited before the next one starts; concurrent builds are independent
/// and may fetch the same event twice.
pub struct CachedResolver {
    favorites: Arc<dyn FavoritesSource>,
    events: Arc<dyn EventSource>,
    schedules: Arc<dyn ScheduleSource>,
    event_store: EventStore,
    schedule_store: ScheduleStore,
    ttl: Duration,
    product_id: String,
    display_name: String,
    sweeps: Mutex<Vec<SweepHandle>>,
}

impl CachedResolver {
    pub fn new(
        favorites: Arc<dyn FavoritesSource>,
        events: Arc<dyn EventSource>,
        schedules: Arc<dyn ScheduleSource>,
        ttl: Duration,
        product_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            favorites,
            events,
            schedules,
            event_store: MemoryStore::new(ttl),
            schedule_store: MemoryStore::new(ttl),
            ttl,
            product_id: product_id.into(),
            display_name: display_name.into(),
            sweeps: Mutex::new(Vec::new()),
        }
    }

    pub fn event_store(&self) -> &EventStore {
        &self.event_store
    }

    pub fn schedule_store(&self) -> &ScheduleStore {
        &self.schedule_store
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the event metadata for `event_id`, fetching it on a miss.
    ///
    /// Failed fetches are not stored.
    pub async fn resolve_event(&self, event_id: &str) -> Result<EventRecord> {
        let key = event_id.to_string();
        if let Some(event) = self.event_store.get(&key) {
            return Ok(event);
        }
        let event = self.events.fetch_event(event_id).await?;
        self.event_store.set(key, event.clone());
        Ok(event)
    }

    /// Returns the schedule entry of `event`, fetching it on a miss.
    pub async fn resolve_schedule(&self, event: &EventRecord) -> Result<CalendarEntry> {
        if let Some(entry) = self.schedule_store.get(&event.id) {
            return Ok(entry);
        }
        let entry = self.schedules.fetch_schedule(event).await?;
        self.schedule_store.set(event.id.clone(), entry.clone());
        Ok(entry)
    }

    /// Builds the calendar of all events on the favorites list of `user_id`.
    ///
    /// The first failure aborts the build; no partial document is returned.
    pub async fn build_document(&self, user_id: &str) -> Result<CalendarDocument> {
        let favorites = self.favorites.fetch_favorites(user_id).await?;
        let mut document = self.empty_document();
        for event_id in favorites.iter() {
            document.push(self.resolve_entry(event_id).await?);
        }
        tracing::debug!(user_id, events = document.len(), "Built favorites calendar");
        Ok(document)
    }

    /// Builds a calendar holding the single event `event_id`.
    pub async fn build_single_event_document(&self, event_id: &str) -> Result<CalendarDocument> {
        let mut document = self.empty_document();
        document.push(self.resolve_entry(event_id).await?);
        Ok(document)
    }

    /// Starts the expiry sweeps of both stores. Does nothing if they are
    /// already running.
    pub fn start_expiration(&self) {
        let mut sweeps = self.sweeps.lock();
        if !sweeps.is_empty() && sweeps.iter().all(SweepHandle::is_running) {
            return;
        }
        sweeps.clear();
        sweeps.push(self.event_store.start_sweep());
        sweeps.push(self.schedule_store.start_sweep());
        tracing::debug!(ttl = ?self.ttl, "Started cache expiration");
    }

    /// Stops both sweeps and waits until they have terminated.
    pub async fn stop_expiration(&self) {
        let sweeps = std::mem::take(&mut *self.sweeps.lock());
        for sweep in sweeps {
            sweep.stop().await;
        }
    }

    async fn resolve_entry(&self, event_id: &str) -> Result<CalendarEntry> {
        let event = self.resolve_event(event_id).await?;
        self.resolve_schedule(&event).await
    }

    fn empty_document(&self) -> CalendarDocument {
        CalendarDocument::new(&self.product_id, &self.display_name, self.ttl)
    }
}
