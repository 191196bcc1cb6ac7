use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::events::application::errors::EventStoreError;
use crate::modules::events::core::patch::EventPatch;
use crate::shared::core::record::RecordId;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateEventBody {
    pub name: Option<String>,
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> Response {
    // Without a JSON content type there is nothing to apply; the event comes back as is.
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateEventBody::default(),
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let Ok(id) = id.parse::<RecordId>() else {
        return error_response(StatusCode::NOT_FOUND, "Event not found");
    };

    let patch = EventPatch {
        name: body.name,
        date: body.date,
    };

    match state.events.update(id, patch).await {
        Ok(event) => Json(event).into_response(),
        Err(EventStoreError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Event not found")
        }
        Err(err) => {
            tracing::error!(error = %err, event_id = id, "failed to update event");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while updating the event",
            )
        }
    }
}
