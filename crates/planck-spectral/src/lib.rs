//! # planck-spectral
//!
//! Blackbody spectral radiance and spectral-to-tristimulus integration.
//!
//! The first two stages of the blackbody color pipeline:
//!
//! 1. [`planck`] - Planck's law: spectral radiance of a thermal emitter
//!    over a wavelength grid, for one temperature.
//! 2. [`tristimulus`] - integration of that radiance against a
//!    color-matching dataset, producing raw CIE XYZ values.
//!
//! Both stages are pure functions of their inputs; no state, no I/O.
//!
//! # Units
//!
//! Strictly SI: wavelengths in meters, temperatures in Kelvin, radiance in
//! W·sr⁻¹·m⁻³. The dataset converts from nanometers once at load time
//! (see `planck-cmf`), never here.
//!
//! # Usage
//!
//! ```rust
//! use planck_cmf::Cmf;
//! use planck_spectral::{planck, tristimulus};
//!
//! let b = planck::spectral_radiance(550e-9, 6500.0);
//! assert!(b > 0.0);
//!
//! let cmf = Cmf::from_nanometers(
//!     vec![400.0, 550.0, 700.0],
//!     vec![0.2, 1.0, 0.1],
//!     vec![0.1, 0.9, 0.1],
//!     vec![0.8, 0.1, 0.0],
//! ).unwrap();
//! let xyz = tristimulus(6500.0, &cmf);
//! let m = xyz.sum();
//! assert!(m > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`planck-math`] - trapezoidal integration, Vec3
//! - [`planck-cmf`] - color-matching dataset
//!
//! # Used By
//!
//! - `planck-table` - the per-temperature sweep

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod planck;
mod tristimulus;

pub use tristimulus::tristimulus;
