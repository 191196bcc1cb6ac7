use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::application::errors::EventStoreError;
use crate::modules::events::core::event::Event;
use crate::shared::core::record::RecordId;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

/// `deleted_event` is a one-element list, the shape existing clients read.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {
    pub message: &'static str,
    pub deleted_event: Vec<Event>,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<RecordId>() else {
        return error_response(StatusCode::NOT_FOUND, "Event not found");
    };

    match state.events.delete(id).await {
        Ok(event) => Json(DeleteEventResponse {
            message: "Event deleted successfully",
            deleted_event: vec![event],
        })
        .into_response(),
        Err(EventStoreError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Event not found")
        }
        Err(err) => {
            tracing::error!(error = %err, event_id = id, "failed to delete event");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while deleting the event",
            )
        }
    }
}
