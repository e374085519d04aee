//! Elbphilharmonie upstream services: data types, errors and the traits the
//! network clients implement.

mod error;
mod http_mapping;
mod schedule;
mod traits;
mod types;

pub use error::{ErrorClass, Result, UpstreamError};
pub use http_mapping::upstream_error_to_status_code;
pub use schedule::{fixup_entry, normalize_schedule, UID_PREFIX};
pub use traits::{EventSource, FavoritesSource, ScheduleSource};
pub use types::{EventRecord, FavoritesList};
