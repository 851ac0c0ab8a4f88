//! SFC Rand Core - Deterministic Random Number Engine
//!
//! Seedable pseudo-random generation whose entire output is reproducible
//! across platforms and releases.
//!
//! # Architecture
//!
//! - **rng**: SFC64 engine, fixed-width integers, floats, bounded values
//! - **distributions**: Ziggurat normal and exponential deviates, tables
//! - **shuffle**: Permutations and Fisher–Yates shuffles
//! - **stream**: Byte output (`read`, `std::io::Read`)
//! - **checkpoint**: Binary and serde snapshots of generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed + same call sequence = same outputs, forever
//! 2. Rejected input never consumes a word or mutates state
//! 3. A restored snapshot continues exactly where the original left off

// Module declarations
pub mod checkpoint;
pub mod distributions;
pub mod rng;
pub mod shuffle;
pub mod stream;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, StateSnapshot, SNAPSHOT_LEN, SNAPSHOT_VERSION};
pub use distributions::{
    exponential_distribution_parameters, normal_distribution_parameters, DistributionParameters,
    TableError,
};
pub use rng::{Generator, RngError, Sfc64};
