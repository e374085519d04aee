use thiserror::Error;

/// Errors that can occur while fetching from the Elbphilharmonie services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
    #[error("Invalid event id: {0}")]
    InvalidEventId(String),
    #[error("Invalid ics file (no events): {url}")]
    NoEvents { url: String },
    #[error("Invalid ics file ({count} events): {url}")]
    MultipleEvents { url: String, count: usize },
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Coarse classification of an [`UpstreamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The upstream service reports that the identifier does not exist.
    InvalidInput,
    /// A schedule document violates the one-event contract.
    Integrity,
    /// Transport, status or decoding failure.
    Infrastructure,
}

impl UpstreamError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidUserId(_) | Self::InvalidEventId(_) => ErrorClass::InvalidInput,
            Self::NoEvents { .. } | Self::MultipleEvents { .. } => ErrorClass::Integrity,
            Self::Request { .. } | Self::UnexpectedStatus { .. } | Self::Decode { .. } => {
                ErrorClass::Infrastructure
            }
        }
    }

    /// Returns true for errors that should be written to the error log.
    ///
    /// Unknown identifiers are expected in normal operation.
    pub fn is_reportable(&self) -> bool {
        self.class() != ErrorClass::InvalidInput
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ids_display() {
        assert_eq!(
            UpstreamError::InvalidUserId("abc".to_string()).to_string(),
            "Invalid user id: abc"
        );
        assert_eq!(
            UpstreamError::InvalidEventId("123".to_string()).to_string(),
            "Invalid event id: 123"
        );
    }

    #[test]
    fn test_multiple_events_display() {
        let error = UpstreamError::MultipleEvents {
            url: "https://example.org/event.ics".to_string(),
            count: 2,
        };
        assert_eq!(
            error.to_string(),
            "Invalid ics file (2 events): https://example.org/event.ics"
        );
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            UpstreamError::InvalidEventId("1".to_string()).class(),
            ErrorClass::InvalidInput
        );
        assert_eq!(
            UpstreamError::NoEvents {
                url: "u".to_string()
            }
            .class(),
            ErrorClass::Integrity
        );
        assert_eq!(
            UpstreamError::UnexpectedStatus {
                url: "u".to_string(),
                status: 500
            }
            .class(),
            ErrorClass::Infrastructure
        );
    }

    #[test]
    fn test_invalid_input_is_not_reportable() {
        assert!(!UpstreamError::InvalidUserId("x".to_string()).is_reportable());
        assert!(UpstreamError::Decode {
            url: "u".to_string(),
            message: "eof".to_string()
        }
        .is_reportable());
    }
}
