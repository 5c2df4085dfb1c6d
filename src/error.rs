use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavleError>;

#[derive(Debug, Error)]
pub enum TavleError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
