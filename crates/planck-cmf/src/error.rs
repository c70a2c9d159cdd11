//! Dataset error types.

use thiserror::Error;

/// Result type for dataset operations.
pub type CmfResult<T> = Result<T, CmfError>;

/// Errors that can occur while loading or validating a color-matching dataset.
///
/// All of these are fatal: the pipeline refuses to integrate over a dataset
/// that failed validation, since an unsorted or malformed grid would produce
/// a wrong table rather than a crash.
#[derive(Debug, Error)]
pub enum CmfError {
    /// Required column missing from the header.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Malformed line or value.
    #[error("parse error: {0}")]
    Parse(String),

    /// Wavelengths are not strictly increasing.
    #[error("wavelengths not strictly increasing at sample {index}")]
    NotSorted {
        /// Index of the first offending sample
        index: usize,
    },

    /// Too few samples to integrate over.
    #[error("need at least 2 samples, found {0}")]
    TooFewSamples(usize),

    /// A sample value is non-finite, or a wavelength is not positive.
    #[error("invalid sample: {0}")]
    InvalidSample(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
