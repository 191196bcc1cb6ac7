// JSON file implementation of the RecordFile port.
//
// Format
// - One JSON array per file, pretty printed with two space indentation.
// - A missing file, or a file with blank content, is an empty collection.
//
// Writes overwrite the file in place. There is no temp file and rename step, so a crash
// mid-write can leave a truncated file behind.

use crate::shared::infrastructure::record_file::{RecordFile, RecordFileError};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub struct JsonRecordFile<R> {
    path: PathBuf,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonRecordFile<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<R> RecordFile<R> for JsonRecordFile<R>
where
    R: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<R>, RecordFileError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(RecordFileError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| RecordFileError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, records: &[R]) -> Result<(), RecordFileError> {
        let write_error = |source| RecordFileError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(write_error)?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|err| RecordFileError::Backend(err.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(write_error)?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "record file written"
        );
        Ok(())
    }
}
