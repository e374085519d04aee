use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::metrics::encode;
use crate::state::AppState;

/// GET /metrics - Prometheus text exposition of the cache statistics.
#[axum::debug_handler]
pub async fn metrics(State(state): State<AppState>) -> Response {
    match encode(&state.registry) {
        Ok(body) => (
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
