use crate::modules::events::application::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::modules::registrations::application::registration_store::RegistrationStore;
use crate::modules::registrations::core::registration::Registration;
use crate::shared::infrastructure::record_file::RecordFileError;
use crate::shared::infrastructure::record_file::json_file::JsonRecordFile;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventStore>,
    pub registrations: Arc<RegistrationStore>,
}

impl AppState {
    pub async fn from_config(config: &AppConfig) -> Result<Self, RecordFileError> {
        let event_file = JsonRecordFile::<Event>::new(&config.events_file);
        let registration_file = JsonRecordFile::<Registration>::new(&config.registrations_file);
        Ok(Self {
            events: Arc::new(EventStore::open(Arc::new(event_file)).await?),
            registrations: Arc::new(RegistrationStore::new(Arc::new(registration_file))),
        })
    }
}
