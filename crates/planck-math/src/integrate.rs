//! Numerical integration over sampled grids.
//!
//! The color-matching dataset samples its curves on a wavelength grid that
//! is not guaranteed to be uniform, so integration weights every interval
//! by its own width.
//!
//! # Usage
//!
//! ```rust
//! use planck_math::trapezoid;
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [0.0, 1.0, 4.0];
//! // Trapezoidal estimate of the integral of x^2 over [0, 2]
//! assert_eq!(trapezoid(&y, &x), 3.0);
//! ```

/// Trapezoidal integration of sampled values `y` over grid `x`.
///
/// Computes `sum_i (x[i+1] - x[i]) * (y[i+1] + y[i]) / 2` in grid order.
/// The grid may be irregular; each interval contributes with its own width.
///
/// # Panics
///
/// Panics if `y` and `x` differ in length or have fewer than two samples.
/// Callers integrate over a validated dataset grid, so a violation here is
/// a bug, not a runtime condition.
///
/// # Example
///
/// ```rust
/// use planck_math::trapezoid;
///
/// // Irregular grid: interval widths 1 and 3
/// let x = [0.0, 1.0, 4.0];
/// let y = [2.0, 2.0, 2.0];
/// assert_eq!(trapezoid(&y, &x), 8.0);
/// ```
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(
        y.len(),
        x.len(),
        "trapezoid: sample and grid lengths differ ({} vs {})",
        y.len(),
        x.len()
    );
    assert!(x.len() >= 2, "trapezoid: need at least two samples");

    let mut acc = 0.0;
    for i in 1..x.len() {
        acc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) * 0.5;
    }
    acc
}
