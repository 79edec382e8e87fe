//! Closed-form quartic solver and its statistical self-test.
//!
//! - `solver`: `solve_quartic` over `[e, d, c, b, a]` complex coefficients,
//!   generic over `f32`/`f64`, no iteration.
//! - `harness`: random root sets → Vieta coefficients → solve → L2 error.
//!
//! API Policy
//! - Prefer the `api` re-exports in callers; module paths may move.

pub mod api;
pub mod harness;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use num_complex::Complex;
pub use solver::{solve_quartic, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::harness::{run, HarnessCfg, Precision, Report, RunMode};
    pub use crate::solver::{
        canonical_sort, solve_quartic, Coefficients, Real, Roots, SolveError,
    };
    pub use num_complex::Complex;
}
