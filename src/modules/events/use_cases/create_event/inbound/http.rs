use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub name: String,
    pub date: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEvent {
        name: body.name,
        date: body.date,
    };

    match state.events.create(command).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to create event");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while adding the event",
            )
        }
    }
}
