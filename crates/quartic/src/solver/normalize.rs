use num_complex::Complex;

use super::scalar::{is_finite, is_zero, Real};
use super::types::{Coefficients, SolveError};

/// Monic quartic `x⁴ + b·x³ + c·x² + d·x + e`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monic<T> {
    pub b: Complex<T>,
    pub c: Complex<T>,
    pub d: Complex<T>,
    pub e: Complex<T>,
}

impl<T: Real> Monic<T> {
    /// Divide `(e, d, c, b)` by the leading coefficient `a`.
    ///
    /// Errors
    /// - `NonFiniteCoefficient` if any input component is NaN/Inf.
    /// - `DegenerateInput` if `a == 0`.
    pub fn from_coefficients(coefficients: &Coefficients<T>) -> Result<Self, SolveError> {
        if let Some(index) = coefficients.iter().position(|&z| !is_finite(z)) {
            return Err(SolveError::NonFiniteCoefficient { index });
        }
        let [e, d, c, b, a] = *coefficients;
        if is_zero(a) {
            return Err(SolveError::DegenerateInput);
        }
        Ok(Self {
            b: b / a,
            c: c / a,
            d: d / a,
            e: e / a,
        })
    }
}
