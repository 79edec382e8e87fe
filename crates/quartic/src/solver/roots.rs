use num_complex::Complex;
use std::cmp::Ordering;

use super::normalize::Monic;
use super::resolvent::Resolvent;
use super::scalar::{is_finite, principal_sqrt, Real};
use super::types::{Coefficients, Intermediate, Roots, SolveError};

/// Solve `a·x⁴ + b·x³ + c·x² + d·x + e = 0` from `[e, d, c, b, a]`.
///
/// Pre: `a ≠ 0` and all coefficients finite (checked).
/// Post: the four roots (with multiplicity); slot order is unspecified, use
/// `canonical_sort` before comparing against other root sets.
///
/// Errors
/// - `DegenerateInput` when `a == 0`.
/// - `NonFiniteCoefficient` for NaN/Inf inputs.
/// - `SingularIntermediate` when the closed form divides by zero on every
///   resolvent branch (e.g. `x⁴ = 0`) or the result overflows.
pub fn solve_quartic<T: Real>(coefficients: &Coefficients<T>) -> Result<Roots<T>, SolveError> {
    let monic = Monic::from_coefficients(coefficients)?;
    let resolvent = Resolvent::compute(&monic)?;
    let roots = extract_roots(monic.b, &resolvent);
    if roots.iter().any(|&z| !is_finite(z)) {
        return Err(SolveError::singular(Intermediate::Roots));
    }
    Ok(roots)
}

/// Root extractor: both quadratic factors solved from `b`, Q3, Q4, Q6, Q7.
///
/// Pre: `r.q7 ≠ 0` (guaranteed by `Resolvent::compute`).
pub fn extract_roots<T: Real>(b: Complex<T>, r: &Resolvent<T>) -> Roots<T> {
    let k = T::lit;
    let base = r.q4 * k(4.0) / k(6.0) - r.q6 * k(4.0);
    let skew = r.q3 / r.q7;
    let lo = principal_sqrt(base - skew);
    let hi = principal_sqrt(base + skew);
    let four = k(4.0);
    [
        (-b - r.q7 - lo) / four,
        (-b - r.q7 + lo) / four,
        (-b + r.q7 - hi) / four,
        (-b + r.q7 + hi) / four,
    ]
}

/// Lexicographic order: real part ascending, then imaginary part ascending.
///
/// Display/testing helper only; not part of the solver contract.
/// NaN components sort last.
pub fn canonical_cmp<T: Real>(a: &Complex<T>, b: &Complex<T>) -> Ordering {
    total(a.re, b.re).then_with(|| total(a.im, b.im))
}

/// Sort roots in place by `canonical_cmp`.
pub fn canonical_sort<T: Real>(roots: &mut [Complex<T>]) {
    roots.sort_by(canonical_cmp);
}

#[inline]
fn total<T: Real>(a: T, b: T) -> Ordering {
    match a.partial_cmp(&b) {
        Some(o) => o,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}
