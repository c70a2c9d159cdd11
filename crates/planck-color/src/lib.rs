//! # planck-color
//!
//! XYZ to display sRGB conversion for the blackbody color pipeline.
//!
//! Takes a normalized CIE XYZ triple (the caller divides raw tristimulus
//! values by their own sum `M` before calling in), applies the fixed
//! XYZ-to-linear-sRGB matrix, gamma-encodes with the sRGB transfer function,
//! and clamps to the displayable range.
//!
//! Blackbody chromaticities at low temperatures fall outside the sRGB gamut;
//! clamping is the deliberate lossy policy for those, not an error.
//!
//! # Usage
//!
//! ```rust
//! use planck_color::xyz_to_srgb;
//! use planck_math::Vec3;
//!
//! // D65-ish white, normalized so X+Y+Z = 1
//! let xyz = Vec3::new(0.3127, 0.3290, 0.3583);
//! let rgb = xyz_to_srgb(xyz);
//! assert!(rgb.x >= 0.0 && rgb.x <= 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`planck-math`] - Mat3/Vec3
//!
//! # Used By
//!
//! - `planck-table` - table assembly

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

use planck_math::{Mat3, Vec3};

/// CIE XYZ to linear sRGB matrix (D65 white point).
///
/// Row-major; multiplies column XYZ vectors.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

/// Converts a normalized XYZ triple to linear sRGB.
///
/// No gamma, no clamping; out-of-gamut chromaticities produce components
/// outside [0, 1], including negatives.
#[inline]
pub fn xyz_to_linear_srgb(xyz: Vec3) -> Vec3 {
    XYZ_TO_SRGB * xyz
}

/// Converts a normalized XYZ triple to a display-ready sRGB color.
///
/// Applies the linear matrix, the sRGB OETF elementwise, then clamps every
/// channel to [0, 1]. Returns a new value; nothing is mutated in place.
///
/// NaN inputs propagate through the matrix and transfer function (and
/// survive the clamp), so an invalid upstream result stays visible instead
/// of being silently coerced.
///
/// # Example
///
/// ```rust
/// use planck_color::xyz_to_srgb;
/// use planck_math::Vec3;
///
/// // Normalized D65 white encodes to a neutral gray: equal channels
/// let rgb = xyz_to_srgb(Vec3::new(0.3127, 0.3290, 0.3583));
/// assert!((rgb.x - rgb.y).abs() < 0.01);
/// assert!((rgb.y - rgb.z).abs() < 0.01);
/// ```
pub fn xyz_to_srgb(xyz: Vec3) -> Vec3 {
    srgb::oetf_rgb(xyz_to_linear_srgb(xyz)).clamp01()
}

/// Chromaticity coordinates (x, y) of an XYZ triple.
///
/// `x = X/(X+Y+Z)`, `y = Y/(X+Y+Z)`. Works on raw or normalized input since
/// chromaticity is scale-free.
///
/// # Example
///
/// ```rust
/// use planck_color::chromaticity;
/// use planck_math::Vec3;
///
/// let (x, y) = chromaticity(Vec3::new(2.0, 2.0, 2.0));
/// assert!((x - 1.0 / 3.0).abs() < 1e-12);
/// assert!((y - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn chromaticity(xyz: Vec3) -> (f64, f64) {
    let m = xyz.sum();
    (xyz.x / m, xyz.y / m)
}
