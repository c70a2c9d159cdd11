//! # planck-cmf
//!
//! Color-matching function dataset for the blackbody color pipeline.
//!
//! A color-matching dataset samples the observer's x̄, ȳ, z̄ sensitivity
//! curves on a shared wavelength grid. The tristimulus integrator weights
//! spectral radiance by these curves, so the grid must be strictly
//! increasing and in the same unit the radiance law uses (meters).
//!
//! # Types
//!
//! - [`Cmf`] - validated dataset (grid in meters, three curves)
//! - [`CmfError`] / [`CmfResult`] - load/validation failures
//!
//! # Formats
//!
//! - [`csv`] - delimited text with a `lambda,xbar,ybar,zbar` header
//!
//! # Usage
//!
//! ```rust,ignore
//! use planck_cmf::csv;
//!
//! let cmf = csv::read("CIE_1964.csv")?;
//! assert!(cmf.len() > 2);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `planck-spectral` - tristimulus integration
//! - `planck-table` - pipeline entry point

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod dataset;
mod error;
pub mod csv;

pub use dataset::Cmf;
pub use error::{CmfError, CmfResult};
