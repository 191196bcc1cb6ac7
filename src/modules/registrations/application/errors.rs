use crate::modules::registrations::use_cases::register_for_event::decision::DecideError;
use crate::shared::core::record::IdsExhausted;
use crate::shared::infrastructure::record_file::RecordFileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationStoreError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),

    #[error(transparent)]
    Storage(#[from] RecordFileError),
}
