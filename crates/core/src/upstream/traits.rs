use async_trait::async_trait;

use crate::calendar::CalendarEntry;

use super::{EventRecord, FavoritesList, Result};

/// Source of users' favorites lists.
#[async_trait]
pub trait FavoritesSource: Send + Sync {
    /// Fetches the current favorites of `user_id`.
    async fn fetch_favorites(&self, user_id: &str) -> Result<FavoritesList>;
}

/// Source of event metadata.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches the metadata of a single event.
    async fn fetch_event(&self, event_id: &str) -> Result<EventRecord>;
}

/// Source of per-event schedule documents.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetches the schedule document of `event` and returns its single,
    /// fixed-up calendar entry.
    async fn fetch_schedule(&self, event: &EventRecord) -> Result<CalendarEntry>;
}
