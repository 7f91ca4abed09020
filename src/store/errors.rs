use thiserror::Error;
use uuid::Uuid;

/// Errors raised by survey store implementations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Survey uuid {uuid} already exists")]
    DuplicateUuid { uuid: Uuid },

    /// The owned record addressed by a write no longer exists
    #[error("No owned survey {uuid} to write")]
    RecordMissing { uuid: Uuid },

    #[error("Stored survey {uuid} has unknown status {status:?}")]
    CorruptStatus { uuid: Uuid, status: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
