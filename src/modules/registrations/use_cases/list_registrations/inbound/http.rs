use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::infrastructure::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.registrations.list().await {
        Ok(registrations) => Json(registrations).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list registrations");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while fetching registrations",
            )
        }
    }
}
