//! Color-matching function dataset.
//!
//! A [`Cmf`] holds the observer's three matching-function curves sampled on
//! a shared wavelength grid. The grid drives the numerical integration of
//! spectra into tristimulus values, so it must be strictly increasing; the
//! constructors validate this once and the rest of the pipeline relies on it.

use crate::{CmfError, CmfResult};

/// Conversion factor from nanometers to meters.
const NM_TO_M: f64 = 1e-9;

/// A color-matching function dataset.
///
/// Stores the wavelength grid in **meters** (the same unit the radiance law
/// uses) together with the x̄, ȳ, z̄ curves, all length-aligned. Datasets are
/// typically supplied in nanometers; [`Cmf::from_nanometers`] converts once
/// at construction so no per-call conversion ever happens downstream.
///
/// # Example
///
/// ```rust
/// use planck_cmf::Cmf;
///
/// let cmf = Cmf::from_nanometers(
///     vec![400.0, 500.0, 600.0, 700.0],
///     vec![0.1, 0.3, 1.0, 0.1],
///     vec![0.0, 0.5, 0.6, 0.1],
///     vec![0.9, 0.3, 0.0, 0.0],
/// ).unwrap();
/// assert_eq!(cmf.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cmf {
    /// Wavelength grid in meters, strictly increasing
    pub lambda_m: Vec<f64>,
    /// x̄ curve samples
    pub xbar: Vec<f64>,
    /// ȳ curve samples
    pub ybar: Vec<f64>,
    /// z̄ curve samples
    pub zbar: Vec<f64>,
}

impl Cmf {
    /// Creates a dataset from columns with wavelengths in meters.
    ///
    /// Validates that all columns are length-aligned with at least two
    /// samples, wavelengths are positive, finite, and strictly increasing,
    /// and every curve value is finite.
    pub fn from_meters(
        lambda_m: Vec<f64>,
        xbar: Vec<f64>,
        ybar: Vec<f64>,
        zbar: Vec<f64>,
    ) -> CmfResult<Self> {
        let cmf = Self {
            lambda_m,
            xbar,
            ybar,
            zbar,
        };
        cmf.validate()?;
        Ok(cmf)
    }

    /// Creates a dataset from columns with wavelengths in nanometers.
    ///
    /// The grid is converted to meters here, once.
    pub fn from_nanometers(
        lambda_nm: Vec<f64>,
        xbar: Vec<f64>,
        ybar: Vec<f64>,
        zbar: Vec<f64>,
    ) -> CmfResult<Self> {
        let lambda_m = lambda_nm.into_iter().map(|l| l * NM_TO_M).collect();
        Self::from_meters(lambda_m, xbar, ybar, zbar)
    }

    /// Returns the number of wavelength samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.lambda_m.len()
    }

    /// Returns true if the dataset has no samples.
    ///
    /// Never true for a validated dataset; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lambda_m.is_empty()
    }

    fn validate(&self) -> CmfResult<()> {
        let n = self.lambda_m.len();
        if n < 2 {
            return Err(CmfError::TooFewSamples(n));
        }
        if self.xbar.len() != n || self.ybar.len() != n || self.zbar.len() != n {
            return Err(CmfError::InvalidSample(format!(
                "column lengths differ: lambda={}, xbar={}, ybar={}, zbar={}",
                n,
                self.xbar.len(),
                self.ybar.len(),
                self.zbar.len()
            )));
        }

        for (i, &l) in self.lambda_m.iter().enumerate() {
            if !l.is_finite() || l <= 0.0 {
                return Err(CmfError::InvalidSample(format!(
                    "wavelength at sample {} is {}",
                    i, l
                )));
            }
        }
        for i in 1..n {
            if self.lambda_m[i] <= self.lambda_m[i - 1] {
                return Err(CmfError::NotSorted { index: i });
            }
        }

        for (name, curve) in [
            ("xbar", &self.xbar),
            ("ybar", &self.ybar),
            ("zbar", &self.zbar),
        ] {
            if let Some(i) = curve.iter().position(|v| !v.is_finite()) {
                return Err(CmfError::InvalidSample(format!(
                    "{} at sample {} is not finite",
                    name, i
                )));
            }
        }

        Ok(())
    }
}
