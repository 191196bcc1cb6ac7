use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::events::application::errors::NoMatchingEvents;
use crate::modules::events::core::filter::EventFilter;
use crate::shared::infrastructure::http::MessageBody;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SearchEventsParams {
    pub name: Option<String>,
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SearchEventsParams>,
) -> Response {
    let filter = EventFilter {
        name: params.name,
        date: params.date,
    };

    match state.events.search(&filter).await {
        Ok(events) => Json(events).into_response(),
        Err(NoMatchingEvents) => (
            StatusCode::NOT_FOUND,
            Json(MessageBody {
                message: "No matching events found".to_string(),
            }),
        )
            .into_response(),
    }
}
