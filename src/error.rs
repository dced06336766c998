use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad time bounds or a non-positive slot interval.
    #[error("Invalid operating window: {0}")]
    InvalidWindow(String),

    /// A room count that is not a positive integer.
    #[error("Invalid capacity: room count must be >= 1, got {0}")]
    InvalidCapacity(i64),

    /// Inverted or otherwise unusable date range.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Could not normalize input value: {0}")]
    InvalidInput(String),

    #[error("Unknown facility: {0}")]
    UnknownFacility(String),

    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scheduling snapshot JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to build internal domain model: {0}")]
    ModelConstructionError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
