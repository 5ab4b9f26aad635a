use thiserror::Error;

/// Result type for timestamp operations
pub type TimestampResult<T> = Result<T, TimestampError>;

/// Timestamp normalization failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Not in `YYYY-MM-DDTHH:MM:SSZ` form, or not a real calendar instant
    #[error("Invalid timestamp format: {0:?}")]
    Invalid(String),

    /// Parsed instant lies after the ingestion time
    #[error("Timestamp cannot be in the future: {0:?}")]
    Future(String),
}

impl TimestampError {
    /// The raw value that was rejected
    pub fn value(&self) -> &str {
        match self {
            TimestampError::Invalid(v) | TimestampError::Future(v) => v,
        }
    }
}
