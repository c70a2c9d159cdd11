//! # planck-table
//!
//! Blackbody color table: temperature sweep, assembly, and JSON export.
//!
//! The last stage of the pipeline. Drives the radiance and tristimulus
//! stages across the whole temperature range, normalizes and converts each
//! result to display sRGB, and persists the field-oriented table that
//! downstream renderers sample at runtime.
//!
//! # Types
//!
//! - [`TempRange`] - half-open integer Kelvin range `[min_k, max_k)`
//! - [`Sweep`] - raw per-temperature XYZ plus normalization factors
//! - [`BlackBodyTable`] - the exported five-column table
//!
//! # Pipeline entry point
//!
//! [`generate`] runs the whole batch: read dataset, sweep, assemble, write.
//! It takes the dataset and output paths as parameters and keeps no
//! process-wide state, so every stage stays independently testable with
//! synthetic datasets.
//!
//! ```rust,ignore
//! use planck_table::{TempRange, generate};
//!
//! let table = generate("CIE_1964.csv", "black_body.json", TempRange::default())?;
//! assert_eq!(table.len(), 19900);
//! ```
//!
//! # Dependencies
//!
//! - [`planck-cmf`] - dataset loading
//! - [`planck-spectral`] - radiance and tristimulus integration
//! - [`planck-color`] - XYZ to sRGB
//! - [`rayon`] - parallel sweep across temperatures
//! - [`serde`]/[`serde_json`] - the JSON artifact
//! - [`tempfile`] - atomic write-then-rename
//!
//! # Used By
//!
//! - `planck-cli` - the batch binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod sweep;
mod table;
pub mod json;

pub use error::{TableError, TableResult};
pub use sweep::{DEFAULT_MAX_K, DEFAULT_MIN_K, Sweep, TempRange};
pub use table::BlackBodyTable;

use std::path::Path;

/// Runs the full batch: dataset in, JSON table out.
///
/// Reads and validates the color-matching dataset, sweeps the temperature
/// range, assembles the display table, and writes it atomically. Returns
/// the assembled table so callers can inspect it without re-reading the
/// artifact.
///
/// # Errors
///
/// Fails fast on a missing/malformed/unsorted dataset (before any
/// computation) and on output I/O; a failed write leaves nothing at the
/// output path.
pub fn generate<P, Q>(dataset: P, output: Q, range: TempRange) -> TableResult<BlackBodyTable>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let cmf = planck_cmf::csv::read(dataset)?;
    let sweep = Sweep::run(&cmf, range);
    let table = BlackBodyTable::from_sweep(&sweep);
    json::write(output, &table)?;
    Ok(table)
}
