// Registration store: reads the registration collection fresh on every request.
//
// There is no cache. Each call loads the file, decides, and writes the whole
// collection back. The mutex makes that read-modify-write cycle the only one in
// flight, so concurrent duplicates cannot both pass the duplicate check.

use crate::modules::registrations::application::errors::RegistrationStoreError;
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::command::RegisterForEvent;
use crate::modules::registrations::use_cases::register_for_event::decide::decide_register;
use crate::modules::registrations::use_cases::register_for_event::decision::Decision;
use crate::shared::infrastructure::record_file::RecordFile;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct RegistrationStore {
    file: Arc<dyn RecordFile<Registration>>,
    write_lock: Mutex<()>,
}

impl RegistrationStore {
    pub fn new(file: Arc<dyn RecordFile<Registration>>) -> Self {
        Self {
            file,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Registration>, RegistrationStoreError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.file.load().await?)
    }

    pub async fn register(
        &self,
        command: RegisterForEvent,
    ) -> Result<Registration, RegistrationStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut registrations = self.file.load().await?;

        match decide_register(&registrations, command)? {
            Decision::Accepted { registration } => {
                registrations.push(registration.clone());
                self.file.save(&registrations).await?;
                tracing::info!(
                    registration_id = registration.id,
                    event_id = registration.event_id,
                    "registration created"
                );
                Ok(registration)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "registration rejected");
                Err(reason.into())
            }
        }
    }
}
