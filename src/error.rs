//! Errors raised at the I/O boundary (analysis files, portfolio CSVs, report export)
//!
//! The engine itself never fails; degenerate inputs are encoded as non-finite
//! metrics on the result instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeasibilityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A portfolio row parsed as CSV but carried a value we can't interpret
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

pub type Result<T> = std::result::Result<T, FeasibilityError>;
