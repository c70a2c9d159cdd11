//! Planck's law of blackbody radiation.
//!
//! Spectral radiance of an ideal thermal emitter as a function of
//! wavelength and temperature:
//!
//! ```text
//! B(λ, T) = C₁ / (λ⁵ · (exp(C₂ / (λT)) − 1))
//! ```
//!
//! with the first and second radiation constants `C₁ = 2hc²` and
//! `C₂ = hc/k`. All quantities are SI: wavelengths in meters, temperatures
//! in Kelvin, radiance in W·sr⁻¹·m⁻³.
//!
//! # Reference
//!
//! CODATA 2018 exact values for h, c, k.

/// Planck constant.
/// Units: 6.62607015e-34 J·s
pub const PLANCK_CONSTANT: f64 = 6.62607015e-34;

/// Speed of light in vacuum.
/// Units: 299792458 m/s
pub const SPEED_OF_LIGHT: f64 = 299792458.0;

/// Boltzmann constant.
/// Units: 1.380649e-23 J/K
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

/// First radiation constant C₁ = 2hc².
/// Units: W·m²·sr⁻¹ (for spectral radiance per unit wavelength)
pub const FIRST_RADIATION: f64 = 2.0 * PLANCK_CONSTANT * SPEED_OF_LIGHT * SPEED_OF_LIGHT;

/// Second radiation constant C₂ = hc/k.
/// Units: m·K
pub const SECOND_RADIATION: f64 = PLANCK_CONSTANT * SPEED_OF_LIGHT / BOLTZMANN_CONSTANT;

/// Spectral radiance of a blackbody at one wavelength.
///
/// # Arguments
///
/// * `wavelength_m` - Wavelength in meters, must be positive
/// * `temperature_k` - Temperature in Kelvin, must be positive
///
/// # Returns
///
/// Spectral radiance in W·sr⁻¹·m⁻³.
///
/// For small `λT` the exponential overflows to infinity and the radiance
/// divides cleanly to `0.0`; that is the physically correct limit, not an
/// error.
///
/// # Panics
///
/// Panics on non-positive wavelength or temperature. The pipeline generates
/// both internally, so a violation is a bug rather than a runtime condition.
///
/// # Example
///
/// ```rust
/// use planck_spectral::planck::spectral_radiance;
///
/// // The sun's photosphere, green light
/// let b = spectral_radiance(500e-9, 5772.0);
/// assert!(b > 0.0);
/// ```
#[inline]
pub fn spectral_radiance(wavelength_m: f64, temperature_k: f64) -> f64 {
    assert!(
        temperature_k > 0.0,
        "temperature must be positive, got {}",
        temperature_k
    );
    assert!(
        wavelength_m > 0.0,
        "wavelength must be positive, got {}",
        wavelength_m
    );

    let expm1 = (SECOND_RADIATION / (wavelength_m * temperature_k)).exp() - 1.0;
    FIRST_RADIATION / (wavelength_m.powi(5) * expm1)
}

/// Spectral radiance sampled over a wavelength grid.
///
/// Returns one radiance value per grid wavelength, in grid order.
///
/// # Example
///
/// ```rust
/// use planck_spectral::planck::radiance_spectrum;
///
/// let grid = [450e-9, 550e-9, 650e-9];
/// let spectrum = radiance_spectrum(3000.0, &grid);
/// assert_eq!(spectrum.len(), 3);
/// ```
pub fn radiance_spectrum(temperature_k: f64, wavelengths_m: &[f64]) -> Vec<f64> {
    wavelengths_m
        .iter()
        .map(|&l| spectral_radiance(l, temperature_k))
        .collect()
}
