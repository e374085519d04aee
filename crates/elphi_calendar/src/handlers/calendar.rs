//! iCalendar endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use elphi_calendar_core::calendar::CalendarDocument;
use elphi_calendar_core::upstream::Result;

use crate::handlers::AppError;
use crate::state::AppState;

const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// GET /merkliste/{user_id} - Calendar of all events on a favorites list.
#[axum::debug_handler]
pub async fn favorites_calendar(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = strip_ics_suffix(&user_id);
    let result = state.resolver.build_document(user_id).await;
    respond(&state, "/merkliste/{user_id}", result)
}

/// GET /events/{event_id} - Calendar holding a single event.
#[axum::debug_handler]
pub async fn event_calendar(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    let event_id = strip_ics_suffix(&event_id);
    let result = state.resolver.build_single_event_document(event_id).await;
    respond(&state, "/events/{event_id}", result)
}

fn respond(state: &AppState, route: &str, result: Result<CalendarDocument>) -> Response {
    match result {
        Ok(document) => (
            [(header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE)],
            document.to_ics(),
        )
            .into_response(),
        Err(err) => {
            if err.is_reportable() {
                state.reporter.report(route, &err);
            }
            AppError(err).into_response()
        }
    }
}

/// Calendar clients often request `<id>.ics`.
fn strip_ics_suffix(id: &str) -> &str {
    id.strip_suffix(".ics").unwrap_or(id)
}
