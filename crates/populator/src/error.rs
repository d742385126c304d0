use thiserror::Error;

pub type Result<T> = std::result::Result<T, PopulateError>;

#[derive(Error, Debug)]
pub enum PopulateError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
