use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::application::errors::EventNotFound;
use crate::shared::core::record::RecordId;
use crate::shell::state::AppState;

// Unlike the other event routes, a miss answers in plain text.
fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Event not found").into_response()
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<RecordId>() else {
        return not_found();
    };

    match state.events.get(id).await {
        Ok(event) => Json(event).into_response(),
        Err(EventNotFound(_)) => not_found(),
    }
}
