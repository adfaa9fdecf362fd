use thiserror::Error;

/// Rejections raised up front, before any accumulation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Sales data or analysis options were not supplied")]
    MissingData,

    #[error("Collection '{collection}' must not be empty")]
    EmptyCollection { collection: &'static str },

    #[error("Strategy '{slot}' is required but was not supplied")]
    MissingStrategy { slot: &'static str },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ReportError::InvalidInput(_))
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
