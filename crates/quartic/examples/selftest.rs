//! Reference self-test run for the closed-form quartic solver.
//!
//! Purpose
//! - Reproduce the reference tiers: float (10⁴ cases, 1e-1), double
//!   (10⁶ cases, 1e-8) and extended/double-double (10⁶ cases, 1e-12), seed 0.
//!   Outliers are logged as they occur and a JSON summary line is printed per
//!   tier.
//!
//! Run
//!   cargo run --release -p quartic --example selftest

use anyhow::Result;
use quartic::harness::{run, HarnessCfg, Precision, RunMode};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    for precision in [Precision::Float, Precision::Double, Precision::Extended] {
        let cfg = HarnessCfg {
            mode: RunMode::Parallel,
            ..HarnessCfg::reference(precision)
        };
        let report = run(&cfg)?;
        let summary = serde_json::json!({
            "base_type": precision,
            "cases": cfg.num_testcases,
            "threshold": cfg.error_threshold,
            "outliers": report.outliers.len(),
            "solver_failures": report.solver_failures,
            "max_error": report.max_error,
        });
        println!("{summary}");
    }
    Ok(())
}
