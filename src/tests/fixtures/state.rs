use crate::modules::events::application::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::registrations::application::registration_store::RegistrationStore;
use crate::modules::registrations::core::registration::Registration;
use crate::shared::infrastructure::record_file::in_memory::InMemoryRecordFile;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub struct TestState {
    pub state: AppState,
    pub event_file: Arc<InMemoryRecordFile<Event>>,
    pub registration_file: Arc<InMemoryRecordFile<Registration>>,
}

pub async fn make_test_state_with(events: Vec<Event>) -> TestState {
    let event_file = Arc::new(InMemoryRecordFile::with_records(events));
    let registration_file = Arc::new(InMemoryRecordFile::<Registration>::new());
    let event_store = EventStore::open(event_file.clone())
        .await
        .expect("failed to open the event store");
    let state = AppState {
        events: Arc::new(event_store),
        registrations: Arc::new(RegistrationStore::new(registration_file.clone())),
    };
    TestState {
        state,
        event_file,
        registration_file,
    }
}

pub async fn make_test_state() -> TestState {
    make_test_state_with(Vec::new()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
