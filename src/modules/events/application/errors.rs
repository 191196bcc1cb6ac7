use crate::shared::core::record::{IdsExhausted, RecordId};
use crate::shared::infrastructure::record_file::RecordFileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event {0} not found")]
    NotFound(RecordId),

    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),

    #[error(transparent)]
    Storage(#[from] RecordFileError),
}

// Reads are served from the cache and cannot hit storage.

#[derive(Debug, Error, PartialEq, Eq)]
#[error("event {0} not found")]
pub struct EventNotFound(pub RecordId);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no matching events found")]
pub struct NoMatchingEvents;
