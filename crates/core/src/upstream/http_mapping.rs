//! Pure functions for mapping upstream errors to HTTP status codes.

use super::{ErrorClass, UpstreamError};

/// Maps an [`UpstreamError`] to an HTTP status code.
///
/// - `InvalidUserId`, `InvalidEventId` -> 404 (Not Found)
/// - everything else -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use elphi_calendar_core::upstream::{upstream_error_to_status_code, UpstreamError};
///
/// let error = UpstreamError::InvalidUserId("nobody".to_string());
/// assert_eq!(upstream_error_to_status_code(&error), 404);
/// ```
pub fn upstream_error_to_status_code(error: &UpstreamError) -> u16 {
    match error.class() {
        ErrorClass::InvalidInput => 404,
        ErrorClass::Integrity | ErrorClass::Infrastructure => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ids_map_to_404() {
        assert_eq!(
            upstream_error_to_status_code(&UpstreamError::InvalidUserId("u".to_string())),
            404
        );
        assert_eq!(
            upstream_error_to_status_code(&UpstreamError::InvalidEventId("e".to_string())),
            404
        );
    }

    #[test]
    fn test_integrity_errors_map_to_503() {
        let error = UpstreamError::MultipleEvents {
            url: "u".to_string(),
            count: 3,
        };
        assert_eq!(upstream_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_transport_errors_map_to_503() {
        let error = UpstreamError::Request {
            url: "u".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(upstream_error_to_status_code(&error), 503);
    }
}
