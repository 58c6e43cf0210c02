use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProformaError {
    #[error("Invalid period index {0}: must be between 0 and 11")]
    InvalidPeriodIndex(usize),

    #[error("Invalid calendar year {0}: cannot be represented as a date")]
    InvalidYear(i32),

    #[error("Projection must contain exactly 12 periods, got {0}")]
    ProjectionLength(usize),

    #[error("Period {index} is labelled {actual}, expected {expected}")]
    PeriodOrder {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("Invariant violation in {period} for {line}: expected {expected}, got {actual}")]
    InvariantViolation {
        period: String,
        line: String,
        expected: f64,
        actual: f64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProformaError>;
