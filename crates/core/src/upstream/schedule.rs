//! Normalization of per-event schedule documents.

use crate::calendar::{parse_calendar, CalendarEntry};

use super::{EventRecord, Result, UpstreamError};

/// Prefix added to upstream UIDs so that rewritten entries never collide
/// with the ones a client may have imported from the upstream directly.
pub const UID_PREFIX: &str = "custom-";

/// Parses a schedule document fetched from `url` and returns its single
/// event, fixed up with the metadata of `event`.
///
/// A document with no VEVENT yields [`UpstreamError::NoEvents`], one with
/// several yields [`UpstreamError::MultipleEvents`].
pub fn normalize_schedule(document: &str, url: &str, event: &EventRecord) -> Result<CalendarEntry> {
    let calendar = parse_calendar(document).map_err(|e| UpstreamError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let mut events = calendar.events.into_iter().map(CalendarEntry::from);

    let Some(mut entry) = events.next() else {
        return Err(UpstreamError::NoEvents {
            url: url.to_string(),
        });
    };
    let extra = events.count();
    if extra > 0 {
        return Err(UpstreamError::MultipleEvents {
            url: url.to_string(),
            count: extra + 1,
        });
    }

    fixup_entry(&mut entry, event);
    Ok(entry)
}

/// Rewrites the UID, takes the summary from the event subtitle and
/// prepends the event title to the description.
///
/// An entry without UID is keyed by the event id. The upstream
/// descriptions contain literal `\n` sequences that survive TEXT
/// unescaping; they are turned into real line breaks.
pub fn fixup_entry(entry: &mut CalendarEntry, event: &EventRecord) {
    let uid = entry.uid().unwrap_or_else(|| event.id.clone());
    entry.set_uid(&format!("{UID_PREFIX}{uid}"));
    entry.set_summary(&event.subtitle);

    let description = entry.description().unwrap_or_default().replace("\\n", "\n");
    entry.set_description(&format!("{}\n\n{}", event.title, description));
}
