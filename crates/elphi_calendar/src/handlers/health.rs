use axum::http::StatusCode;

/// GET /health - Liveness probe.
///
/// Answers immediately without contacting any upstream service.
#[axum::debug_handler]
pub async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}
