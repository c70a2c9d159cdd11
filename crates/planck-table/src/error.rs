//! Table error types.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while building or persisting the color table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Invalid temperature range.
    #[error("invalid temperature range: [{min_k}, {max_k})")]
    InvalidRange {
        /// Lower bound (inclusive), Kelvin
        min_k: u32,
        /// Upper bound (exclusive), Kelvin
        max_k: u32,
    },

    /// Table columns are not length-aligned.
    #[error("misaligned table columns: {0}")]
    Misaligned(String),

    /// Color-matching dataset failed to load or validate.
    #[error(transparent)]
    Cmf(#[from] planck_cmf::CmfError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
