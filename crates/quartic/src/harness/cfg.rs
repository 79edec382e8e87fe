//! Reference tolerances and sizes for the self-test tiers (internal).
//!
//! Policy
//! - Fixed constants mirroring the reference runs. Callers override them via
//!   `HarnessCfg` fields rather than editing these.

/// Half-width of the sampling interval for every real/imaginary component.
pub(crate) const SAMPLE_RANGE: f64 = 10.0;
/// Seed used by the reference tiers.
pub(crate) const REFERENCE_SEED: u64 = 0;

/// Single precision: error is dominated by the Cardano step.
pub(crate) const FLOAT_CASES: u64 = 10_000;
pub(crate) const FLOAT_THRESHOLD: f64 = 1e-1;

/// Double precision.
pub(crate) const DOUBLE_CASES: u64 = 1_000_000;
pub(crate) const DOUBLE_THRESHOLD: f64 = 1e-8;

/// Extended precision (double-double).
pub(crate) const EXTENDED_CASES: u64 = 1_000_000;
pub(crate) const EXTENDED_THRESHOLD: f64 = 1e-12;
