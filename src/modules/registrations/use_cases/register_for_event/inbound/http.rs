// Registration endpoint.
//
// Rejections (missing fields, duplicates) still answer 200 with `success: false`;
// clients read the `success` flag, not the status code. Only storage failures use 500.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::modules::registrations::application::errors::RegistrationStoreError;
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::record::RecordId;
use crate::shared::infrastructure::http::json_or_form::JsonOrForm;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForEventBody {
    #[serde(default, deserialize_with = "lenient_event_id")]
    pub event_id: Option<RecordId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

// Forms send every value as text, and a blank field arrives as `eventId=`. Numeric
// text is accepted; blank, non-numeric or null ids decode as absent.
fn lenient_event_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawEventId {
        Number(RecordId),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match RawEventId::deserialize(deserializer)? {
        RawEventId::Number(id) => Some(id),
        RawEventId::Text(text) => text.trim().parse().ok(),
        RawEventId::Other(_) => None,
    })
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum RegisterForEventResponse {
    Registered { success: bool, data: Registration },
    Failed { success: bool, message: String },
}

impl RegisterForEventResponse {
    fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            success: false,
            message: message.into(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<RegisterForEventBody>,
) -> Response {
    tracing::debug!(?body, "incoming registration");

    let command = RegisterForEvent {
        event_id: body.event_id,
        name: body.name,
        email: body.email,
    };

    match state.registrations.register(command).await {
        Ok(registration) => Json(RegisterForEventResponse::Registered {
            success: true,
            data: registration,
        })
        .into_response(),
        Err(RegistrationStoreError::Domain(reason)) => {
            Json(RegisterForEventResponse::failed(reason.to_string())).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to register for event");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RegisterForEventResponse::failed(
                    "Something went wrong while registering for the event",
                )),
            )
                .into_response()
        }
    }
}
