use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordFileError {
    #[error("failed to read record file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write record file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A whole collection of records persisted as one unit.
///
/// `load` returns the full collection and `save` replaces it. There is no
/// partial update: every mutation rewrites every record.
#[async_trait]
pub trait RecordFile<R>: Send + Sync
where
    R: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<R>, RecordFileError>;
    async fn save(&self, records: &[R]) -> Result<(), RecordFileError>;
}

pub mod in_memory;
pub mod json_file;
