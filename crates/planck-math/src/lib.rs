//! # planck-math
//!
//! Math primitives for spectral color computation.
//!
//! This crate provides the numeric foundation for the blackbody color
//! pipeline:
//!
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - [`Mat3`] - 3x3 matrices for color space transformations
//! - [`trapezoid`] - trapezoidal integration over irregular grids
//!
//! # Design
//!
//! Everything here is `f64`. Spectral radiance spans roughly 140 orders of
//! magnitude across the supported temperature domain, well past what `f32`
//! can represent, and the integration results feed directly into the
//! persisted table.
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use planck_math::{Mat3, Vec3};
//!
//! // XYZ to linear sRGB (D65)
//! let xyz_to_rgb = Mat3::from_rows([
//!     [3.2406, -1.5372, -0.4986],
//!     [-0.9689, 1.8758, 0.0415],
//!     [0.0557, -0.2040, 1.0570],
//! ]);
//!
//! let xyz = Vec3::new(0.9505, 1.0, 1.089);
//! let rgb = xyz_to_rgb * xyz;
//! ```
//!
//! # Used By
//!
//! - `planck-spectral` - tristimulus integration
//! - `planck-color` - XYZ to sRGB conversion
//! - `planck-table` - table assembly

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod integrate;
mod mat3;
mod vec3;

pub use integrate::*;
pub use mat3::*;
pub use vec3::*;
