use ical::parser::ical::component::IcalCalendar;
use ical::IcalParser;

use super::ParseError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses the first VCALENDAR object of `input`.
///
/// A leading byte order mark is skipped. Objects after the first one are
/// ignored.
pub fn parse_calendar(input: &str) -> Result<IcalCalendar, ParseError> {
    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    match IcalParser::new(input.as_bytes()).next() {
        Some(Ok(calendar)) => Ok(calendar),
        Some(Err(err)) => Err(ParseError::Syntax(err.to_string())),
        None => Err(ParseError::Empty),
    }
}
