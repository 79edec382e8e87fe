//! Per-case replay tokens and random test-case draws.
//!
//! Determinism uses a replay token `(seed, index)` mixed into one `StdRng`
//! per case, so cases can be drawn in any order (or in parallel) and still
//! match the sequential stream.

use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::vieta::expand_roots;
use crate::solver::{Coefficients, Real, Roots};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One generated quartic with known roots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestCase<T> {
    pub token: ReplayToken,
    pub leading: Complex<T>,
    pub roots: Roots<T>,
    pub coefficients: Coefficients<T>,
}

/// Draw the leading coefficient then four roots, each component uniform in
/// `[-range, range)`, and expand them into coefficients.
///
/// Components are drawn as `f64` and rounded to `T`, so the `f32` and `f64`
/// tiers see the same root sets up to rounding.
pub fn draw_case<T: Real>(token: ReplayToken, range: f64) -> TestCase<T> {
    let mut rng = token.to_std_rng();
    let mut draw = || {
        let re = rng.gen_range(-range..range);
        let im = rng.gen_range(-range..range);
        Complex::new(T::lit(re), T::lit(im))
    };
    let leading = draw();
    let roots = [draw(), draw(), draw(), draw()];
    TestCase {
        token,
        leading,
        roots,
        coefficients: expand_roots(leading, &roots),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a: TestCase<f64> = draw_case(tok, 10.0);
        let b: TestCase<f64> = draw_case(tok, 10.0);
        assert_eq!(a, b);
        let other: TestCase<f64> = draw_case(ReplayToken { seed: 42, index: 8 }, 10.0);
        assert_ne!(a.roots, other.roots);
    }

    #[test]
    fn components_stay_in_range() {
        for index in 0..200 {
            let case: TestCase<f64> = draw_case(ReplayToken { seed: 3, index }, 2.5);
            for z in case.roots.iter().chain(std::iter::once(&case.leading)) {
                assert!((-2.5..2.5).contains(&z.re));
                assert!((-2.5..2.5).contains(&z.im));
            }
        }
    }

    #[test]
    fn precision_tiers_share_the_stream() {
        let tok = ReplayToken { seed: 9, index: 1 };
        let d: TestCase<f64> = draw_case(tok, 10.0);
        let f: TestCase<f32> = draw_case(tok, 10.0);
        for (x, y) in d.roots.iter().zip(f.roots.iter()) {
            assert!((x.re - y.re as f64).abs() < 1e-5);
            assert!((x.im - y.im as f64).abs() < 1e-5);
        }
    }
}
