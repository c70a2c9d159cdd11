//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1] for in-gamut values. Out-of-range linear input is
//!   passed through the matching branch unchanged (negative values take the
//!   linear segment) so the caller can clamp after encoding.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// NaN propagates through both branches; it is never coerced to a number.
///
/// # Example
///
/// ```rust
/// use planck_color::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies the sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: planck_math::Vec3) -> planck_math::Vec3 {
    planck_math::Vec3::new(oetf(rgb.x), oetf(rgb.y), oetf(rgb.z))
}
