//! iCalendar documents on top of the `ical` crate: parsing upstream
//! schedules, the VEVENT accessors used by the fixup and the feed envelope.

mod document;
mod duration;
mod entry;
mod error;
mod parse;
mod text;

pub use document::CalendarDocument;
pub use duration::format_duration;
pub use entry::{param, text_property, CalendarEntry};
pub use error::ParseError;
pub use ical::parser::ical::component::{IcalCalendar, IcalEvent};
pub use ical::property::Property;
pub use parse::parse_calendar;
