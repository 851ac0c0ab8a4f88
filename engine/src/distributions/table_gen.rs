//! Ziggurat table generation and drift detection
//!
//! Rebuilds the 256-layer tables from their defining recurrence so the
//! shipped arrays can be checked against it. Sampling never calls into this
//! module; it reads the arrays in `tables` directly.
//!
//! For a density `f` with inverse `f_inv`, tail start `r`, layer area `v`
//! and magnitude scale `s`:
//!
//! ```text
//! q      = v / f(r)
//! k[0]   = (r / q) * s        k[1] = 0
//! w[0]   = q / s              w[255] = r / s
//! f[0]   = 1                  f[255] = f(r)
//!
//! for i in 254..=1:
//!     d      = f_inv(v / d + f(d))      (d starts at r)
//!     k[i+1] = (d / t) * s              (t is the previous d)
//!     f[i]   = f(d)
//!     w[i]   = d / s
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::tables::{FE, FN, KE, KN, RE, RN, WE, WN};
use super::ZIGGURAT_LAYERS;
use crate::rng::RngError;

/// Relative tolerance for comparing regenerated tables with shipped ones
pub const TABLE_TOLERANCE: f64 = 1e-12;

/// Errors from table verification
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("{table}[{index}] drifted: shipped {shipped}, regenerated {regenerated}")]
    Drift {
        table: &'static str,
        index: usize,
        shipped: f64,
        regenerated: f64,
    },

    #[error("Invalid table parameters: {0}")]
    InvalidParameters(#[from] RngError),
}

/// Inputs to the table recurrence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableParams {
    /// Right edge of the base layer, where the tail begins
    pub tail: f64,
    /// Common area of every layer
    pub area: f64,
    /// Range of the sampled magnitude (2^52 for normal, 2^53 for exponential)
    pub scale: f64,
}

impl TableParams {
    /// Parameters the shipped normal tables were built from
    pub const NORMAL: TableParams = TableParams {
        tail: RN,
        area: 0.00492867323399,
        scale: 4503599627370496.0,
    };

    /// Parameters the shipped exponential tables were built from
    pub const EXPONENTIAL: TableParams = TableParams {
        tail: RE,
        area: 0.0039496598225815571993,
        scale: 9007199254740992.0,
    };

    fn validate(&self) -> Result<(), RngError> {
        for (name, value) in [("tail", self.tail), ("area", self.area), ("scale", self.scale)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RngError::InvalidArgument(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// One regenerated table set
#[derive(Debug, Clone, PartialEq)]
pub struct ZigguratTables {
    pub k: [u64; ZIGGURAT_LAYERS],
    pub w: [f64; ZIGGURAT_LAYERS],
    pub f: [f64; ZIGGURAT_LAYERS],
}

impl ZigguratTables {
    /// SHA-256 of the exact bit patterns, see [`fingerprint`]
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.k, &self.w, &self.f)
    }
}

fn generate<D, I>(params: &TableParams, density: D, inverse: I) -> Result<ZigguratTables, RngError>
where
    D: Fn(f64) -> f64,
    I: Fn(f64) -> f64,
{
    params.validate()?;
    let TableParams { tail, area, scale } = *params;

    let mut k = [0u64; ZIGGURAT_LAYERS];
    let mut w = [0f64; ZIGGURAT_LAYERS];
    let mut f = [0f64; ZIGGURAT_LAYERS];

    let q = area / density(tail);
    let top = ZIGGURAT_LAYERS - 1;
    k[0] = ((tail / q) * scale) as u64;
    k[1] = 0;
    w[0] = q / scale;
    w[top] = tail / scale;
    f[0] = 1.0;
    f[top] = density(tail);

    let mut d = tail;
    let mut t = tail;
    for i in (1..top).rev() {
        d = inverse(area / d + density(d));
        if !d.is_finite() {
            return Err(RngError::InvalidArgument(format!(
                "recurrence left the density's domain at layer {} (tail {}, area {})",
                i, tail, area
            )));
        }
        k[i + 1] = ((d / t) * scale) as u64;
        t = d;
        f[i] = density(d);
        w[i] = d / scale;
    }

    Ok(ZigguratTables { k, w, f })
}

/// Build normal tables for `exp(-x^2 / 2)`
///
/// # Errors
/// [`RngError::InvalidArgument`] if a parameter is non-finite or not
/// positive, or if the area does not fit `ZIGGURAT_LAYERS` layers under
/// the density.
pub fn generate_normal_tables(params: &TableParams) -> Result<ZigguratTables, RngError> {
    generate(
        params,
        |x| (-0.5 * x * x).exp(),
        |y| (-2.0 * y.ln()).sqrt(),
    )
}

/// Build exponential tables for `exp(-x)`
///
/// # Errors
/// Same conditions as [`generate_normal_tables`].
pub fn generate_exponential_tables(params: &TableParams) -> Result<ZigguratTables, RngError> {
    generate(params, |x| (-x).exp(), |y| -y.ln())
}

/// Relative closeness with a guard for values at or near zero
fn near_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff / (a.abs().max(b.abs()) + f64::MIN_POSITIVE) < epsilon
}

fn compare(
    table: &'static str,
    shipped: impl IntoIterator<Item = f64>,
    regenerated: impl IntoIterator<Item = f64>,
) -> Result<(), TableError> {
    for (index, (s, r)) in shipped.into_iter().zip(regenerated).enumerate() {
        if !near_equal(s, r, TABLE_TOLERANCE) {
            return Err(TableError::Drift {
                table,
                index,
                shipped: s,
                regenerated: r,
            });
        }
    }
    Ok(())
}

fn verify(
    name: [&'static str; 3],
    shipped: (&[u64; ZIGGURAT_LAYERS], &[f64; ZIGGURAT_LAYERS], &[f64; ZIGGURAT_LAYERS]),
    regenerated: &ZigguratTables,
) -> Result<(), TableError> {
    let (k, w, f) = shipped;
    let result = compare(
        name[0],
        k.iter().map(|&v| v as f64),
        regenerated.k.iter().map(|&v| v as f64),
    )
    .and_then(|_| compare(name[1], w.iter().copied(), regenerated.w.iter().copied()))
    .and_then(|_| compare(name[2], f.iter().copied(), regenerated.f.iter().copied()));

    match &result {
        Ok(()) => log::debug!("{}/{}/{} agree with the recurrence", name[0], name[1], name[2]),
        Err(e) => log::warn!("ziggurat table drift: {}", e),
    }
    result
}

/// Check the shipped normal tables against a fresh regeneration
///
/// # Errors
/// [`TableError::Drift`] naming the first entry that differs by more than
/// [`TABLE_TOLERANCE`] relative.
pub fn verify_normal_tables() -> Result<(), TableError> {
    let regenerated = generate_normal_tables(&TableParams::NORMAL)?;
    verify(["kn", "wn", "fn"], (&KN, &WN, &FN), &regenerated)
}

/// Check the shipped exponential tables against a fresh regeneration
///
/// # Errors
/// [`TableError::Drift`] naming the first entry that differs by more than
/// [`TABLE_TOLERANCE`] relative.
pub fn verify_exponential_tables() -> Result<(), TableError> {
    let regenerated = generate_exponential_tables(&TableParams::EXPONENTIAL)?;
    verify(["ke", "we", "fe"], (&KE, &WE, &FE), &regenerated)
}

/// Hex SHA-256 over `k` (little-endian), then the bits of `w`, then `f`
pub fn fingerprint(k: &[u64], w: &[f64], f: &[f64]) -> String {
    let mut hasher = Sha256::new();
    for v in k {
        hasher.update(v.to_le_bytes());
    }
    for v in w.iter().chain(f) {
        hasher.update(v.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
