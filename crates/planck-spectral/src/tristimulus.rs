//! Spectral-to-tristimulus integration.
//!
//! Folds a blackbody spectrum against the observer's color-matching curves
//! to produce CIE XYZ tristimulus values:
//!
//! ```text
//! X(T) = ∫ B(λ, T) · x̄(λ) dλ
//! ```
//!
//! and likewise for Y and Z. Integration is trapezoidal over the dataset's
//! own wavelength grid, which may be irregular; grid order (ascending) is
//! the integration order.

use crate::planck::radiance_spectrum;
use planck_cmf::Cmf;
use planck_math::{Vec3, trapezoid};

/// Tristimulus values of blackbody emission at one temperature.
///
/// Evaluates the radiance spectrum on the dataset grid, weights it by each
/// matching-function curve, and integrates. The returned [`Vec3`] is the
/// raw (unnormalized) XYZ triple; its component sum is the normalization
/// factor `M`.
///
/// # Example
///
/// ```rust
/// use planck_cmf::Cmf;
/// use planck_spectral::tristimulus;
///
/// let cmf = Cmf::from_nanometers(
///     vec![400.0, 500.0, 600.0, 700.0],
///     vec![0.1, 0.3, 1.0, 0.1],
///     vec![0.0, 0.5, 0.6, 0.1],
///     vec![0.9, 0.3, 0.0, 0.0],
/// ).unwrap();
///
/// let xyz = tristimulus(5000.0, &cmf);
/// assert!(xyz.x > 0.0 && xyz.y > 0.0 && xyz.z > 0.0);
/// ```
pub fn tristimulus(temperature_k: f64, cmf: &Cmf) -> Vec3 {
    let radiance = radiance_spectrum(temperature_k, &cmf.lambda_m);

    let integrate = |curve: &[f64]| {
        let weighted: Vec<f64> = radiance.iter().zip(curve).map(|(b, c)| b * c).collect();
        trapezoid(&weighted, &cmf.lambda_m)
    };

    Vec3::new(
        integrate(&cmf.xbar),
        integrate(&cmf.ybar),
        integrate(&cmf.zbar),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planck_math::trapezoid;

    fn flat_cmf() -> Cmf {
        // All three curves identically 1 over the grid
        Cmf::from_nanometers(
            vec![400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0],
            vec![1.0; 7],
            vec![1.0; 7],
            vec![1.0; 7],
        )
        .unwrap()
    }

    #[test]
    fn test_flat_curves_give_equal_components() {
        let xyz = tristimulus(5000.0, &flat_cmf());
        assert_eq!(xyz.x, xyz.y);
        assert_eq!(xyz.y, xyz.z);
        assert!(xyz.x > 0.0);
    }

    #[test]
    fn test_matches_direct_integration() {
        let cmf = flat_cmf();
        let radiance = radiance_spectrum(5000.0, &cmf.lambda_m);
        let expected = trapezoid(&radiance, &cmf.lambda_m);
        let xyz = tristimulus(5000.0, &cmf);
        assert_relative_eq!(xyz.x, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_curve_integrates_to_zero() {
        let cmf = Cmf::from_nanometers(
            vec![400.0, 500.0, 600.0],
            vec![1.0, 1.0, 1.0],
            vec![0.5, 0.5, 0.5],
            vec![0.0, 0.0, 0.0],
        )
        .unwrap();
        let xyz = tristimulus(3000.0, &cmf);
        assert_eq!(xyz.z, 0.0);
        // Halving the curve halves the integral
        assert_relative_eq!(xyz.y, xyz.x * 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_monotonic_in_temperature() {
        // Radiance grows with T at every wavelength, so each integral must too
        let cmf = flat_cmf();
        let cold = tristimulus(1000.0, &cmf);
        let hot = tristimulus(10000.0, &cmf);
        assert!(hot.x > cold.x);
        assert!(hot.y > cold.y);
        assert!(hot.z > cold.z);
    }

    #[test]
    fn test_irregular_grid_respected() {
        // Same curve sampled on grids with different spacing must not agree
        // if the function differs between the shared endpoints; here we just
        // pin that the irregular grid uses per-interval widths.
        let cmf = Cmf::from_nanometers(
            vec![400.0, 410.0, 700.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap();
        let radiance = radiance_spectrum(5000.0, &cmf.lambda_m);
        let expected = trapezoid(&radiance, &cmf.lambda_m);
        assert_relative_eq!(tristimulus(5000.0, &cmf).x, expected, max_relative = 1e-12);
    }
}
