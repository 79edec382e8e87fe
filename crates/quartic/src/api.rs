//! Curated surface for callers (UNSTABLE).
//!
//! - Solver entry point, intermediate types, and ordering helpers.
//! - Harness configuration, runners, and report types.

// Solver
pub use crate::solver::{
    canonical_cmp, canonical_sort, extract_roots, principal_cbrt, principal_sqrt, solve_quartic,
    Coefficients, Intermediate, Monic, Real, Resolvent, Roots, SolveError,
};
// Self-test harness
pub use crate::harness::{
    draw_case, evaluate_case, expand_roots, root_distance, run, run_typed, HarnessCfg,
    HarnessError, Outlier, Precision, ReplayToken, Report, RunMode, TestCase,
};

use num_complex::Complex;

/// Solve from real coefficients `[e, d, c, b, a]`.
pub fn solve_quartic_real(coefficients: [f64; 5]) -> Result<Roots<f64>, SolveError> {
    solve_quartic(&coefficients.map(|v| Complex::new(v, 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_entry_point_matches_complex() {
        let mut roots = solve_quartic_real([24.0, -50.0, 35.0, -10.0, 1.0]).unwrap();
        canonical_sort(&mut roots);
        for (k, z) in roots.iter().enumerate() {
            assert!((z.re - (k + 1) as f64).abs() < 1e-9);
            assert!(z.im.abs() < 1e-9);
        }
    }

    #[test]
    fn real_entry_point_reports_degenerate_input() {
        assert_eq!(
            solve_quartic_real([1.0, 0.0, 0.0, 0.0, 0.0]),
            Err(SolveError::DegenerateInput)
        );
    }
}
