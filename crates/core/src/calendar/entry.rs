use std::fmt;

use ical::generator::Emitter;
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;

use super::text::{escape_text, unescape_text};

/// Builds a property without parameters from a value that is already in
/// wire form.
pub(crate) fn raw_property(name: &str, value: impl Into<String>) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(value.into()),
    }
}

/// Builds a TEXT property, escaping `text`.
pub fn text_property(name: &str, text: &str) -> Property {
    raw_property(name, escape_text(text))
}

/// Returns the first value of the parameter `name`.
pub fn param<'a>(property: &'a Property, name: &str) -> Option<&'a str> {
    property
        .params
        .as_ref()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
}

/// A single VEVENT taken from a schedule document.
#[derive(Debug, Clone)]
pub struct CalendarEntry {
    event: IcalEvent,
}

impl CalendarEntry {
    pub fn event(&self) -> &IcalEvent {
        &self.event
    }

    /// Returns the first property called `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.event
            .properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn text(&self, name: &str) -> Option<String> {
        self.property(name)?.value.as_deref().map(unescape_text)
    }

    pub fn uid(&self) -> Option<String> {
        self.text("UID")
    }

    pub fn summary(&self) -> Option<String> {
        self.text("SUMMARY")
    }

    pub fn description(&self) -> Option<String> {
        self.text("DESCRIPTION")
    }

    pub fn location(&self) -> Option<String> {
        self.text("LOCATION")
    }

    /// The DTSTART property as received, including parameters such as TZID.
    pub fn start(&self) -> Option<&Property> {
        self.property("DTSTART")
    }

    /// The DTEND property as received, including parameters such as TZID.
    pub fn end(&self) -> Option<&Property> {
        self.property("DTEND")
    }

    pub fn set_uid(&mut self, uid: &str) {
        self.replace(text_property("UID", uid));
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.replace(text_property("SUMMARY", summary));
    }

    pub fn set_description(&mut self, description: &str) {
        self.replace(text_property("DESCRIPTION", description));
    }

    /// Replaces every property with the name of `property`. The new one
    /// takes the position of the first replaced one, or is appended.
    fn replace(&mut self, property: Property) {
        let properties = &mut self.event.properties;
        let position = properties
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(&property.name));
        properties.retain(|p| !p.name.eq_ignore_ascii_case(&property.name));
        match position {
            Some(index) => properties.insert(index, property),
            None => properties.push(property),
        }
    }
}

impl From<IcalEvent> for CalendarEntry {
    fn from(event: IcalEvent) -> Self {
        Self { event }
    }
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event.generate())
    }
}
