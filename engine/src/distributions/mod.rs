//! Non-uniform deviates
//!
//! Standard normal and standard exponential samples via the ziggurat method,
//! plus the tables that drive it.
//!
//! The shipped tables in [`tables`] are what sampling reads. The
//! [`table_gen`] module rebuilds them from first principles for drift checks
//! and fingerprinting only.

pub mod table_gen;
pub mod tables;
mod ziggurat;

use serde::Serialize;

pub use table_gen::{
    fingerprint, generate_exponential_tables, generate_normal_tables, verify_exponential_tables,
    verify_normal_tables, TableError, TableParams, ZigguratTables,
};

/// Layers per ziggurat
pub const ZIGGURAT_LAYERS: usize = 256;

/// Read-only view of one distribution's ziggurat
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionParameters {
    /// Where the unbounded tail begins
    pub tail: f64,
    /// Fast-accept thresholds, in units of the sampled magnitude
    pub k: &'static [u64],
    /// Layer widths, scaled by the magnitude's range
    pub w: &'static [f64],
    /// Density at each layer boundary
    pub f: &'static [f64],
}

impl DistributionParameters {
    /// SHA-256 of the exact table bit patterns
    pub fn fingerprint(&self) -> String {
        fingerprint(self.k, self.w, self.f)
    }
}

/// Tables used by [`crate::Generator::norm_float64`]
pub fn normal_distribution_parameters() -> DistributionParameters {
    DistributionParameters {
        tail: tables::RN,
        k: &tables::KN,
        w: &tables::WN,
        f: &tables::FN,
    }
}

/// Tables used by [`crate::Generator::exp_float64`]
pub fn exponential_distribution_parameters() -> DistributionParameters {
    DistributionParameters {
        tail: tables::RE,
        k: &tables::KE,
        w: &tables::WE,
        f: &tables::FE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_point_at_shipped_tables() {
        let normal = normal_distribution_parameters();
        assert_eq!(normal.tail, tables::RN);
        assert_eq!(normal.k.as_ptr(), tables::KN.as_ptr());
        assert_eq!(normal.k.len(), ZIGGURAT_LAYERS);

        let exp = exponential_distribution_parameters();
        assert_eq!(exp.tail, tables::RE);
        assert_eq!(exp.f.as_ptr(), tables::FE.as_ptr());
    }

    #[test]
    fn test_density_boundaries() {
        for params in [normal_distribution_parameters(), exponential_distribution_parameters()] {
            assert_eq!(params.f[0], 1.0);
            assert_eq!(params.k[1], 0);
            // Layer boundaries move outward as the density falls
            for i in 1..ZIGGURAT_LAYERS {
                assert!(params.f[i] < params.f[i - 1], "f[{}]", i);
            }
        }
    }
}
