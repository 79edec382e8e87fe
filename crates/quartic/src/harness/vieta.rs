use num_complex::Complex;

use crate::solver::{Coefficients, Real, Roots};

/// Expand `a·(x−r₀)(x−r₁)(x−r₂)(x−r₃)` into `[e, d, c, b, a]` (Vieta's formulas).
pub fn expand_roots<T: Real>(a: Complex<T>, r: &Roots<T>) -> Coefficients<T> {
    let [r0, r1, r2, r3] = *r;
    let s1 = r0 + r1 + r2 + r3;
    let s2 = r0 * r1 + r0 * r2 + r1 * r2 + r0 * r3 + r1 * r3 + r2 * r3;
    let s3 = r0 * r1 * r2 + r0 * r1 * r3 + r0 * r2 * r3 + r1 * r2 * r3;
    let s4 = r0 * r1 * r2 * r3;
    [a * s4, -a * s3, a * s2, -a * s1, a]
}
