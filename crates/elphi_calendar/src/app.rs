use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        calendar::{event_calendar, favorites_calendar},
        health::health,
        metrics::metrics,
    },
    state::AppState,
};

/// Upper bound for a whole calendar build, including all upstream requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/merkliste/{user_id}", get(favorites_calendar))
        .route("/events/{event_id}", get(event_calendar))
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .with_state(state)
}
