use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use elphi_calendar_core::upstream::{upstream_error_to_status_code, UpstreamError};

/// Error response of the calendar endpoints.
///
/// Invalid identifiers keep their message; every other failure answers with a
/// generic body so upstream URLs are not leaked to clients.
pub struct AppError(pub UpstreamError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = upstream_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        let body = match &self.0 {
            UpstreamError::InvalidUserId(id) => format!("Invalid User ID: {id}"),
            UpstreamError::InvalidEventId(id) => format!("Invalid Event ID: {id}"),
            _ => "Service Unavailable".to_string(),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_user_is_not_found() {
        let response = AppError(UpstreamError::InvalidUserId("abc".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, "Invalid User ID: abc");
    }

    #[tokio::test]
    async fn test_invalid_event_is_not_found() {
        let response = AppError(UpstreamError::InvalidEventId("E1".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, "Invalid Event ID: E1");
    }

    #[tokio::test]
    async fn test_integrity_failure_is_unavailable() {
        let response = AppError(UpstreamError::MultipleEvents {
            url: "https://example.test/e1.ics".to_string(),
            count: 2,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body(response).await, "Service Unavailable");
    }
}
