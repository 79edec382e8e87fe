//! Real/complex scalar abstraction shared by the solver and the harness.
//!
//! - `Real`: the floating type the algorithm is generic over (`f32`, `f64`,
//!   and double-double `TwoFloat` for the extended tier).
//! - `principal_sqrt`, `principal_cbrt`: branch-consistent complex roots.
//!
//! Branch convention
//! - Both roots are `z^(1/n)` on the principal branch of `log z`
//!   (argument in `(-π, π]`, cut along the negative real axis).
//!   num-complex's `sqrt`/`cbrt` implement exactly this convention and keep
//!   the sign of a signed-zero imaginary part on the cut.

use num_complex::Complex;
use num_traits::Float;
use std::fmt::Debug;
use twofloat::TwoFloat;

/// Floating type the quartic solver can run over.
pub trait Real: Float + Debug + Send + Sync + 'static {
    /// Short name used in logs and reports.
    const NAME: &'static str;

    /// Literal constant (exact for the small integers used by the formulas).
    fn lit(x: f64) -> Self;

    /// Widen to `f64` for reporting.
    fn to_f64_lossy(self) -> f64;
}

impl Real for f32 {
    const NAME: &'static str = "float";

    #[inline]
    fn lit(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    const NAME: &'static str = "double";

    #[inline]
    fn lit(x: f64) -> Self {
        x
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

/// Double-double (~106-bit mantissa), the extended tier.
impl Real for TwoFloat {
    const NAME: &'static str = "extended";

    #[inline]
    fn lit(x: f64) -> Self {
        TwoFloat::from(x)
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.hi() + self.lo()
    }
}

/// Principal square root, `-π/2 < arg ≤ π/2`.
#[inline]
pub fn principal_sqrt<T: Real>(z: Complex<T>) -> Complex<T> {
    z.sqrt()
}

/// Principal cube root, `-π/3 < arg ≤ π/3`.
#[inline]
pub fn principal_cbrt<T: Real>(z: Complex<T>) -> Complex<T> {
    z.cbrt()
}

/// Primitive cube root of unity `ω = e^(2πi/3)`.
#[inline]
pub(crate) fn omega<T: Real>() -> Complex<T> {
    let half = T::lit(0.5);
    Complex::new(-half, T::lit(3.0).sqrt() * half)
}

#[inline]
pub(crate) fn is_zero<T: Real>(z: Complex<T>) -> bool {
    z.re == T::zero() && z.im == T::zero()
}

/// Both components finite. `Complex::is_finite` needs `FloatCore`, which
/// `Real` does not carry.
#[inline]
pub(crate) fn is_finite<T: Real>(z: Complex<T>) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_matches_principal_power() {
        let samples = [
            Complex::new(3.0, 4.0),
            Complex::new(-3.0, 4.0),
            Complex::new(-3.0, -4.0),
            Complex::new(0.5, -2.0),
        ];
        for z in samples {
            let s = principal_sqrt(z);
            let p = z.powf(0.5);
            assert!((s - p).norm() < 1e-12, "z={z} sqrt={s} pow={p}");
            assert!(s.re >= 0.0);
        }
    }

    #[test]
    fn cbrt_matches_principal_power() {
        let samples = [
            Complex::new(8.0, 0.0),
            Complex::new(1.0, 1.0),
            Complex::new(-2.0, 5.0),
            Complex::new(-2.0, -5.0),
            Complex::new(0.0, 27.0),
        ];
        for z in samples {
            let c = principal_cbrt(z);
            let p = z.powf(1.0 / 3.0);
            assert!((c - p).norm() < 1e-12, "z={z} cbrt={c} pow={p}");
            assert!((c * c * c - z).norm() < 1e-12);
        }
    }

    #[test]
    fn negative_real_axis_uses_upper_side() {
        let c = principal_cbrt(Complex::new(-8.0_f64, 0.0));
        assert!((c - Complex::new(1.0, 3.0_f64.sqrt())).norm() < 1e-12);
        let s = principal_sqrt(Complex::new(-4.0_f64, 0.0));
        assert!((s - Complex::new(0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn finiteness_checks_both_components() {
        assert!(is_finite(Complex::new(1.0_f64, -2.0)));
        assert!(!is_finite(Complex::new(f64::NAN, 0.0)));
        assert!(!is_finite(Complex::new(0.0, f64::NEG_INFINITY)));
        assert!(is_finite(Complex::new(TwoFloat::from(3.0), TwoFloat::from(0.5))));
        assert!(!is_finite(Complex::new(TwoFloat::from(1.0), TwoFloat::NAN)));
    }

    #[test]
    fn double_double_roots_invert() {
        let z = Complex::new(TwoFloat::from(2.0), TwoFloat::from(0.0));
        let s = principal_sqrt(z);
        let back = s * s - z;
        assert!(back.norm().to_f64_lossy() < 1e-26, "{:?}", back);
        let c = principal_cbrt(Complex::new(TwoFloat::from(-2.0), TwoFloat::from(5.0)));
        let back = c * c * c - Complex::new(TwoFloat::from(-2.0), TwoFloat::from(5.0));
        assert!(back.norm().to_f64_lossy() < 1e-14, "{:?}", back);
    }

    #[test]
    fn omega_is_cube_root_of_unity() {
        let w = omega::<f64>();
        assert!((w * w * w - Complex::new(1.0, 0.0)).norm() < 1e-14);
        assert!((w.arg() - 2.0 * std::f64::consts::FRAC_PI_3).abs() < 1e-14);
    }
}
