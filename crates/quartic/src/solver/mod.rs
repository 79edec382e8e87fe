//! Closed-form quartic solver over complex coefficients.
//!
//! Purpose
//! - Return all four roots of `a·x⁴ + b·x³ + c·x² + d·x + e = 0` without
//!   iteration, generic over the floating type (`f32`, `f64`, double-double `TwoFloat`).
//!
//! Pipeline
//! - Normalizer (`Monic`): divide by the leading coefficient.
//! - Resolvent engine (`Resolvent`): Q1..Q7, one Cardano cube root and two
//!   principal square roots, with cube-root branch selection.
//! - Root extractor (`extract_roots`): two more square roots, one per
//!   quadratic factor.
//!
//! Degeneracy
//! - `a = 0`, repeated-root structures that zero Q7 on every branch (`x⁴ = 0`)
//!   and overflow surface as `SolveError` instead of NaN/Inf roots.

mod normalize;
mod resolvent;
mod roots;
pub mod scalar;
mod types;

pub use normalize::Monic;
pub use resolvent::Resolvent;
pub use roots::{canonical_cmp, canonical_sort, extract_roots, solve_quartic};
pub use scalar::{principal_cbrt, principal_sqrt, Real};
pub use types::{Coefficients, Intermediate, Roots, SolveError};
