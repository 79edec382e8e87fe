//! Coefficient/root containers and solver errors.
//!
//! - `Coefficients<T>`: `[e, d, c, b, a]`, constant term first.
//! - `Roots<T>`: the four roots, slot order unspecified.
//! - `SolveError`: degeneracy signals surfaced instead of NaN/Inf results.

use num_complex::Complex;
use std::fmt;

/// Quartic coefficients `(e, d, c, b, a)` for `a·x⁴ + b·x³ + c·x² + d·x + e`.
pub type Coefficients<T> = [Complex<T>; 5];

/// Four complex roots. Slot order is a function of branch choices only.
pub type Roots<T> = [Complex<T>; 4];

/// Intermediate quantity that degenerated during a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intermediate {
    /// Cardano term vanished while `Q1 ≠ 0`.
    Q5,
    /// Quadratic split term vanished (or overflowed) on every cube-root branch.
    Q7,
    /// Final root expressions are not finite.
    Roots,
}

impl fmt::Display for Intermediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Q5 => f.write_str("Q5"),
            Self::Q7 => f.write_str("Q7"),
            Self::Roots => f.write_str("roots"),
        }
    }
}

/// Solver failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Leading coefficient `a` is zero: not a quartic.
    DegenerateInput,
    /// Coefficient at `index` (constant term = 0) is NaN or infinite.
    NonFiniteCoefficient { index: usize },
    /// Closed form divides by zero or overflows (repeated-root structure).
    SingularIntermediate { quantity: Intermediate },
}

impl SolveError {
    pub(crate) fn singular(quantity: Intermediate) -> Self {
        Self::SingularIntermediate { quantity }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput => write!(f, "degenerate input: leading coefficient is zero"),
            Self::NonFiniteCoefficient { index } => {
                write!(f, "coefficient {index} is not finite")
            }
            Self::SingularIntermediate { quantity } => {
                write!(f, "singular intermediate: {quantity} is zero or not finite")
            }
        }
    }
}

impl std::error::Error for SolveError {}
