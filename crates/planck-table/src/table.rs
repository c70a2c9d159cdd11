//! The exported blackbody color table.
//!
//! Field-oriented (column-major) layout: one array per field, all aligned
//! by index to the same ascending temperature order. This is the shape the
//! downstream renderer samples directly.

use crate::{Sweep, TableError, TableResult};
use planck_color::xyz_to_srgb;
use planck_math::Vec3;
use serde::{Deserialize, Serialize};

/// The persisted blackbody color table.
///
/// Serializes to a JSON object with exactly five keys:
///
/// ```json
/// { "R": [...], "G": [...], "B": [...], "T": [...], "M": [...] }
/// ```
///
/// Index `i` of every array describes the same temperature `T[i]`.
/// `R`, `G`, `B` are gamma-encoded sRGB channels in [0, 1]; `T` is the
/// temperature in Kelvin; `M` is the unnormalized tristimulus sum, kept so
/// consumers can re-scale overall intensity later.
///
/// # Example
///
/// ```rust
/// use planck_cmf::Cmf;
/// use planck_table::{BlackBodyTable, Sweep, TempRange};
///
/// let cmf = Cmf::from_nanometers(
///     vec![400.0, 550.0, 700.0],
///     vec![0.2, 1.0, 0.1],
///     vec![0.1, 0.9, 0.1],
///     vec![0.8, 0.1, 0.0],
/// ).unwrap();
///
/// let sweep = Sweep::run(&cmf, TempRange::new(1000, 1100).unwrap());
/// let table = BlackBodyTable::from_sweep(&sweep);
/// assert_eq!(table.len(), 100);
/// assert_eq!(table.t[0], 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlackBodyTable {
    /// Red channel per temperature, gamma-encoded sRGB in [0, 1]
    #[serde(rename = "R")]
    pub r: Vec<f64>,
    /// Green channel per temperature, gamma-encoded sRGB in [0, 1]
    #[serde(rename = "G")]
    pub g: Vec<f64>,
    /// Blue channel per temperature, gamma-encoded sRGB in [0, 1]
    #[serde(rename = "B")]
    pub b: Vec<f64>,
    /// Temperature per entry, Kelvin, ascending
    #[serde(rename = "T")]
    pub t: Vec<u32>,
    /// Unnormalized tristimulus sum per temperature
    #[serde(rename = "M")]
    pub m: Vec<f64>,
}

impl BlackBodyTable {
    /// Assembles the display table from a sweep's raw tristimulus values.
    ///
    /// Normalizes each XYZ triple by its own `M = X + Y + Z`, then converts
    /// to gamma-encoded, gamut-clamped sRGB. The normalization happens here,
    /// before the color conversion is called; the converter only ever sees
    /// normalized input.
    pub fn from_sweep(sweep: &Sweep) -> Self {
        let n = sweep.len();
        let mut r = Vec::with_capacity(n);
        let mut g = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);

        for (&xyz, &m) in sweep.xyz.iter().zip(&sweep.norm) {
            let rgb = xyz_to_srgb(xyz / m);
            r.push(rgb.x);
            g.push(rgb.y);
            b.push(rgb.z);
        }

        Self {
            r,
            g,
            b,
            t: sweep.temperatures.clone(),
            m: sweep.norm.clone(),
        }
    }

    /// Number of table entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Color of the entry nearest to `temperature_k`.
    ///
    /// Temperatures outside the table domain clamp to the first/last entry,
    /// which is how consumers sample the artifact at render time.
    ///
    /// # Panics
    ///
    /// Panics on an empty table; [`BlackBodyTable::validate`] rejects those
    /// before they can be sampled.
    pub fn color_at(&self, temperature_k: f64) -> Vec3 {
        assert!(!self.is_empty(), "cannot sample an empty table");
        let min_k = self.t[0] as f64;
        let max_k = self.t[self.t.len() - 1] as f64;
        let i = (temperature_k.clamp(min_k, max_k) - min_k) as usize;
        Vec3::new(self.r[i], self.g[i], self.b[i])
    }

    /// Checks that the table is non-empty, all five columns are
    /// length-aligned, and temperatures ascend in steps of 1 Kelvin.
    ///
    /// Applied after deserialization; a hand-edited or truncated artifact
    /// must not be sampled with mismatched columns.
    pub fn validate(&self) -> TableResult<()> {
        let n = self.t.len();
        if n == 0 {
            return Err(TableError::Misaligned("table is empty".into()));
        }
        if self.r.len() != n || self.g.len() != n || self.b.len() != n || self.m.len() != n {
            return Err(TableError::Misaligned(format!(
                "R={}, G={}, B={}, T={}, M={}",
                self.r.len(),
                self.g.len(),
                self.b.len(),
                n,
                self.m.len()
            )));
        }
        if let Some(i) = self.t.windows(2).position(|w| w[1] != w[0] + 1) {
            return Err(TableError::Misaligned(format!(
                "temperatures not contiguous at index {}",
                i + 1
            )));
        }
        Ok(())
    }
}
