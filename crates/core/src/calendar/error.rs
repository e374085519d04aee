use thiserror::Error;

/// Errors that can occur when reading iCalendar text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid iCalendar data: {0}")]
    Syntax(String),
    #[error("Document contains no calendar")]
    Empty,
}
