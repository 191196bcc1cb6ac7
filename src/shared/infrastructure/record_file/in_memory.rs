// In memory implementation of the RecordFile port.
//
// Purpose
// - Support store and handler tests without touching the file system.
//
// Responsibilities
// - Keep the last saved collection in memory.
// - Fail every call while toggled offline, to exercise storage failure paths.

use crate::shared::infrastructure::record_file::{RecordFile, RecordFileError};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryRecordFile<R> {
    records: RwLock<Vec<R>>,
    is_offline: AtomicBool,
}

impl<R> Default for InMemoryRecordFile<R> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<R> InMemoryRecordFile<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RecordFileError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RecordFileError::Backend("Record file offline".into()));
        }
        Ok(())
    }
}

impl<R: Clone> InMemoryRecordFile<R> {
    /// Replaces the stored collection directly, bypassing any store in front of it.
    pub async fn overwrite(&self, records: Vec<R>) {
        *self.records.write().await = records;
    }

    pub async fn snapshot(&self) -> Vec<R> {
        self.records.read().await.clone()
    }
}

#[async_trait::async_trait]
impl<R> RecordFile<R> for InMemoryRecordFile<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<R>, RecordFileError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[R]) -> Result<(), RecordFileError> {
        self.ensure_online()?;
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
