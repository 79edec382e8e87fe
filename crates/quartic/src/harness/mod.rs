//! Statistical self-test for the quartic solver.
//!
//! Purpose
//! - Generate random root sets, expand them into coefficients (Vieta),
//!   solve, and measure the L2 distance between canonically sorted root sets.
//! - Report every case whose distance meets or exceeds the threshold. The
//!   harness never fails on outliers; they are observational data.
//!
//! Model
//! - Case `i` is drawn from its own RNG keyed by `ReplayToken { seed, index: i }`,
//!   so `RunMode::Sequential` and `RunMode::Parallel` see identical cases and
//!   produce identical, index-sorted reports.

mod cfg;
mod replay;
mod vieta;

pub use replay::{draw_case, ReplayToken, TestCase};
pub use vieta::expand_roots;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::solver::{canonical_sort, solve_quartic, Real, Roots};
use twofloat::TwoFloat;

/// Floating base type of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Float,
    Double,
    /// Double-double (`twofloat::TwoFloat`).
    Extended,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// Case evaluation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Reference mode, one case after another.
    #[default]
    Sequential,
    /// Cases spread over the rayon pool.
    Parallel,
}

/// Harness configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessCfg {
    #[serde(rename = "base_type", alias = "precision")]
    pub precision: Precision,
    pub num_testcases: u64,
    /// Cases with distance `>= error_threshold` are reported.
    pub error_threshold: f64,
    pub seed: u64,
    /// Components are drawn from `[-range, range)`.
    #[serde(default = "default_range")]
    pub range: f64,
    #[serde(default)]
    pub mode: RunMode,
}

fn default_range() -> f64 {
    cfg::SAMPLE_RANGE
}

impl HarnessCfg {
    /// Reference tier: float 10⁴ cases at 1e-1, double 10⁶ at 1e-8,
    /// extended 10⁶ at 1e-12.
    pub fn reference(precision: Precision) -> Self {
        let (num_testcases, error_threshold) = match precision {
            Precision::Float => (cfg::FLOAT_CASES, cfg::FLOAT_THRESHOLD),
            Precision::Double => (cfg::DOUBLE_CASES, cfg::DOUBLE_THRESHOLD),
            Precision::Extended => (cfg::EXTENDED_CASES, cfg::EXTENDED_THRESHOLD),
        };
        Self {
            precision,
            num_testcases,
            error_threshold,
            seed: cfg::REFERENCE_SEED,
            range: cfg::SAMPLE_RANGE,
            mode: RunMode::Sequential,
        }
    }

    fn validate(&self) -> Result<(), HarnessError> {
        if self.num_testcases == 0 {
            return Err(HarnessError::invalid("num_testcases must be positive"));
        }
        if !(self.error_threshold.is_finite() && self.error_threshold > 0.0) {
            return Err(HarnessError::invalid("error_threshold must be a positive real"));
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(HarnessError::invalid("range must be a positive real"));
        }
        Ok(())
    }
}

impl Default for HarnessCfg {
    fn default() -> Self {
        Self::reference(Precision::Double)
    }
}

/// Harness failure (configuration only; outliers are not failures).
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    InvalidConfig { reason: String },
}

impl HarnessError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid harness config: {reason}"),
        }
    }
}

impl std::error::Error for HarnessError {}

/// A test case whose distance met the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub index: u64,
    /// L2 distance; `inf` when the solver returned an error.
    pub error: f64,
}

/// Outcome of one harness run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub cfg: HarnessCfg,
    /// Largest finite distance observed.
    pub max_error: f64,
    /// Cases where the solver returned an error (counted as outliers too).
    pub solver_failures: u64,
    /// Sorted by case index.
    pub outliers: Vec<Outlier>,
}

impl Report {
    pub fn outlier_fraction(&self) -> f64 {
        self.outliers.len() as f64 / self.cfg.num_testcases as f64
    }
}

/// L2 distance between two root sets after canonical sorting.
pub fn root_distance<T: Real>(expected: &Roots<T>, actual: &Roots<T>) -> T {
    let want = sorted(expected);
    let got = sorted(actual);
    want.iter()
        .zip(got.iter())
        .map(|(w, g)| (*w - *g).norm_sqr())
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}

/// Solve one case and return its distance to the true roots (`inf` on solver error).
pub fn evaluate_case<T: Real>(case: &TestCase<T>) -> f64 {
    match solve_quartic(&case.coefficients) {
        Ok(found) => root_distance(&case.roots, &found).to_f64_lossy(),
        Err(err) => {
            tracing::debug!(index = case.token.index, %err, "solver error");
            f64::INFINITY
        }
    }
}

/// Run the harness described by `cfg`, dispatching on its precision.
pub fn run(cfg: &HarnessCfg) -> Result<Report, HarnessError> {
    match cfg.precision {
        Precision::Float => run_typed::<f32>(cfg),
        Precision::Double => run_typed::<f64>(cfg),
        Precision::Extended => run_typed::<TwoFloat>(cfg),
    }
}

/// Run the harness over an explicit floating type, ignoring `cfg.precision`.
pub fn run_typed<T: Real>(cfg: &HarnessCfg) -> Result<Report, HarnessError> {
    cfg.validate()?;
    tracing::info!(
        cases = cfg.num_testcases,
        base_type = T::NAME,
        threshold = cfg.error_threshold,
        seed = cfg.seed,
        mode = ?cfg.mode,
        "running quartic self-test"
    );

    let failures = AtomicU64::new(0);
    let check = |index: u64| -> f64 {
        let case = draw_case::<T>(
            ReplayToken {
                seed: cfg.seed,
                index,
            },
            cfg.range,
        );
        let error = evaluate_case(&case);
        if !error.is_finite() {
            failures.fetch_add(1, Ordering::Relaxed);
        }
        if error >= cfg.error_threshold {
            tracing::warn!(index, error, "testcase over threshold");
        }
        error
    };

    let tally = match cfg.mode {
        RunMode::Sequential => (0..cfg.num_testcases)
            .map(|i| (i, check(i)))
            .fold(Tally::default(), |t, (i, err)| t.push(i, err, cfg.error_threshold)),
        RunMode::Parallel => (0..cfg.num_testcases)
            .into_par_iter()
            .map(|i| (i, check(i)))
            .fold(Tally::default, |t, (i, err)| t.push(i, err, cfg.error_threshold))
            .reduce(Tally::default, Tally::merge),
    };
    let mut outliers = tally.outliers;
    outliers.sort_by_key(|o| o.index);

    let report = Report {
        cfg: *cfg,
        max_error: tally.max_error,
        solver_failures: failures.into_inner(),
        outliers,
    };
    tracing::info!(
        outliers = report.outliers.len(),
        solver_failures = report.solver_failures,
        max_error = report.max_error,
        "done"
    );
    Ok(report)
}

#[derive(Default)]
struct Tally {
    outliers: Vec<Outlier>,
    max_error: f64,
}

impl Tally {
    fn push(mut self, index: u64, error: f64, threshold: f64) -> Self {
        if error >= threshold {
            self.outliers.push(Outlier { index, error });
        }
        if error.is_finite() && error > self.max_error {
            self.max_error = error;
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.outliers.extend(other.outliers);
        self.max_error = self.max_error.max(other.max_error);
        self
    }
}

/// Canonically sorted copy of `roots`.
pub fn sorted<T: Real>(roots: &Roots<T>) -> Roots<T> {
    let mut out = *roots;
    canonical_sort(&mut out);
    out
}
