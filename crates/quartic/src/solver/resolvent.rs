//! Resolvent engine: Q1..Q7 from the monic coefficients.
//!
//! Definitions (monic `x⁴ + b x³ + c x² + d x + e`)
//! - Q1 = c² − 3bd + 12e
//! - Q2 = 2c³ − 9bcd + 27d² + 27b²e − 72ce
//! - Q3 = 8bc − 16d − 2b³
//! - Q4 = 3b² − 8c
//! - Q5 = cbrt(Q2/2 ± sqrt(Q2²/4 − Q1³))
//! - Q6 = (Q1/Q5 + Q5)/3
//! - Q7 = 2 sqrt(Q4/12 + Q6)
//!
//! Q5 solves the resolvent cubic by Cardano's formula; Q6 is one of its three
//! roots and Q7 the linear-term split of the quartic into two quadratics.
//!
//! Branch selection
//! - The inner square root is added with the sign that maximizes `|Q2/2 ± √·|`.
//!   With that choice Q5 = 0 only when Q1 = Q2 = 0, where Q6 = 0 is exact.
//! - All three cube roots `Q5·ωᵏ` give valid resolvent roots. We keep the one
//!   with the largest `|Q7|` (ties keep the principal root, k = 0) so that
//!   `Q3/Q7` stays bounded. For `x⁴ − 1` the principal root alone gives Q7 = 0.

use num_complex::Complex;

use super::normalize::Monic;
use super::scalar::{is_finite, is_zero, omega, principal_cbrt, principal_sqrt, Real};
use super::types::{Intermediate, SolveError};

/// Intermediate quantities of one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolvent<T> {
    pub q1: Complex<T>,
    pub q2: Complex<T>,
    pub q3: Complex<T>,
    pub q4: Complex<T>,
    /// Selected cube root, `principal_cbrt(..) · ω^branch`.
    pub q5: Complex<T>,
    pub q6: Complex<T>,
    pub q7: Complex<T>,
    /// Cube-root branch index k ∈ {0, 1, 2}; 0 is the principal root.
    pub branch: u8,
}

impl<T: Real> Resolvent<T> {
    pub fn compute(m: &Monic<T>) -> Result<Self, SolveError> {
        let Monic { b, c, d, e } = *m;
        let k = T::lit;

        let q1 = c * c - b * d * k(3.0) + e * k(12.0);
        let q2 = c * c * c * k(2.0) - b * c * d * k(9.0) + d * d * k(27.0) + b * b * e * k(27.0)
            - c * e * k(72.0);
        let q3 = b * c * k(8.0) - d * k(16.0) - b * b * b * k(2.0);
        let q4 = b * b * k(3.0) - c * k(8.0);

        let half_q2 = q2 / k(2.0);
        let disc = principal_sqrt(q2 * q2 / k(4.0) - q1 * q1 * q1);
        let plus = half_q2 + disc;
        let minus = half_q2 - disc;
        let cardano = if minus.norm_sqr() > plus.norm_sqr() {
            minus
        } else {
            plus
        };
        let q5_principal = principal_cbrt(cardano);
        if is_zero(q5_principal) && !is_zero(q1) {
            return Err(SolveError::singular(Intermediate::Q5));
        }

        let w = omega::<T>();
        let mut best: Option<Self> = None;
        let mut q5 = q5_principal;
        for branch in 0..3u8 {
            let q6 = if is_zero(q5) {
                Complex::new(T::zero(), T::zero())
            } else {
                (q1 / q5 + q5) / k(3.0)
            };
            let q7 = principal_sqrt(q4 / k(12.0) + q6) * k(2.0);
            let better = match &best {
                None => true,
                Some(prev) => improves_split(q7, prev.q7),
            };
            if better {
                best = Some(Self {
                    q1,
                    q2,
                    q3,
                    q4,
                    q5,
                    q6,
                    q7,
                    branch,
                });
            }
            q5 = q5 * w;
        }
        let best = best.ok_or(SolveError::singular(Intermediate::Q7))?;
        if is_zero(best.q7) || !is_finite(best.q7) {
            tracing::debug!(branch = best.branch, "quadratic split degenerated");
            return Err(SolveError::singular(Intermediate::Q7));
        }
        Ok(best)
    }
}

/// Branch preference: any finite split beats a non-finite one, then larger `|Q7|`.
pub(crate) fn improves_split<T: Real>(candidate: Complex<T>, incumbent: Complex<T>) -> bool {
    match (is_finite(candidate), is_finite(incumbent)) {
        (true, false) => true,
        (false, _) => false,
        (true, true) => candidate.norm_sqr() > incumbent.norm_sqr(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monic(b: f64, c: f64, d: f64, e: f64) -> Monic<f64> {
        Monic {
            b: Complex::new(b, 0.0),
            c: Complex::new(c, 0.0),
            d: Complex::new(d, 0.0),
            e: Complex::new(e, 0.0),
        }
    }

    #[test]
    fn polynomial_quantities_match_definitions() {
        // (x-1)(x-2)(x-3)(x-4) = x⁴ − 10x³ + 35x² − 50x + 24
        let r = Resolvent::compute(&monic(-10.0, 35.0, -50.0, 24.0)).unwrap();
        assert!((r.q1 - Complex::new(35.0 * 35.0 - 3.0 * 500.0 + 288.0, 0.0)).norm() < 1e-9);
        assert!((r.q3 - Complex::new(-2800.0 + 800.0 + 2000.0, 0.0)).norm() < 1e-9);
        assert!((r.q4 - Complex::new(300.0 - 280.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn q6_is_root_of_resolvent_cubic() {
        // With Q5 = u and Q1 = u·v, Q6 = (u + v)/3 satisfies 27y³ − 9·Q1·y − Q2 = 0.
        let r = Resolvent::compute(&monic(1.0, -2.0, 0.5, 3.0)).unwrap();
        let y = r.q6;
        let residual = y * y * y * 27.0 - r.q1 * y * 9.0 - r.q2;
        assert!(residual.norm() < 1e-9 * (1.0 + r.q2.norm()), "{residual}");
    }

    #[test]
    fn x4_minus_1_avoids_vanishing_split() {
        let r = Resolvent::compute(&monic(0.0, 0.0, 0.0, -1.0)).unwrap();
        assert_ne!(r.branch, 0, "principal branch gives Q7 = 0 here");
        assert!(r.q7.norm() > 1.0);
    }

    #[test]
    fn finite_branch_replaces_nan_incumbent() {
        let nan = Complex::new(f64::NAN, 0.0);
        let inf = Complex::new(f64::INFINITY, 1.0);
        let small = Complex::new(1e-3, 0.0);
        assert!(improves_split(small, nan));
        assert!(improves_split(small, inf));
        assert!(!improves_split(nan, small));
        assert!(!improves_split(inf, small));
        assert!(!improves_split(nan, nan));
        assert!(improves_split(Complex::new(2.0, 0.0), small));
        // Ties keep the incumbent.
        assert!(!improves_split(small, small));
    }

    #[test]
    fn quadruple_root_is_singular() {
        assert_eq!(
            Resolvent::compute(&monic(0.0, 0.0, 0.0, 0.0)),
            Err(SolveError::singular(Intermediate::Q7))
        );
    }

    #[test]
    fn cancellation_free_cardano_term() {
        // x⁴ + i·x: Q1 = 0, Q2 = −27, so Q2/2 + √(Q2²/4) cancels to zero.
        let m = Monic {
            b: Complex::new(0.0, 0.0),
            c: Complex::new(0.0, 0.0),
            d: Complex::new(0.0, 1.0),
            e: Complex::new(0.0, 0.0),
        };
        let r = Resolvent::compute(&m).unwrap();
        assert!(r.q1.norm() < 1e-15);
        assert!((r.q2 - Complex::new(-27.0, 0.0)).norm() < 1e-12);
        assert!(r.q5.norm() > 1.0);
        assert!(r.q6.is_finite() && r.q7.is_finite());
    }
}
