use std::time::Duration;

use ical::generator::Emitter;
use ical::parser::ical::component::IcalCalendar;
use ical::property::Property;

use super::entry::raw_property;
use super::{format_duration, text_property, CalendarEntry};

/// A calendar feed: envelope properties followed by entries in the order
/// they were pushed.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    properties: Vec<Property>,
    entries: Vec<CalendarEntry>,
}

impl CalendarDocument {
    /// Creates an empty published Gregorian calendar.
    ///
    /// `refresh_interval` is advertised to clients both as the standard
    /// `REFRESH-INTERVAL` and the older `X-PUBLISHED-TTL`. The display name
    /// is set as `NAME` and as `X-WR-CALNAME` for clients that predate
    /// RFC 7986. Product id and name are TEXT values and get escaped.
    pub fn new(product_id: &str, display_name: &str, refresh_interval: Duration) -> Self {
        let interval = format_duration(refresh_interval);
        let mut refresh = raw_property("REFRESH-INTERVAL", interval.clone());
        refresh.params = Some(vec![("VALUE".to_string(), vec!["DURATION".to_string()])]);

        let properties = vec![
            raw_property("VERSION", "2.0"),
            text_property("PRODID", product_id),
            raw_property("METHOD", "PUBLISH"),
            raw_property("CALSCALE", "GREGORIAN"),
            text_property("NAME", display_name),
            text_property("X-WR-CALNAME", display_name),
            refresh,
            raw_property("X-PUBLISHED-TTL", interval),
        ];
        Self {
            properties,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: CalendarEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first envelope property called `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Serializes the document in iCalendar format.
    pub fn to_ics(&self) -> String {
        let mut calendar = IcalCalendar::new();
        calendar.properties = self.properties.clone();
        calendar.events = self
            .entries
            .iter()
            .map(|entry| entry.event().clone())
            .collect();
        calendar.generate()
    }
}
