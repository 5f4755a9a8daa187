//! Prometheus metrics for validation runs.
//!
//! Exposes the latest run's statistics and running totals in the
//! Prometheus text format, e.g. for a node-exporter textfile collector
//! fed by periodic generator certification.
//!
//! # Metrics Exposed
//!
//! ## Run metrics
//! - `prng_validation_runs_total` - Validation runs recorded
//! - `prng_validation_runs_rejected_total` - Runs with at least one failed test
//! - `prng_validation_sample_size` - Sample size of the latest run
//! - `prng_validation_tests_failed` - Failed tests in the latest run
//!
//! ## Statistic metrics (latest run, absent tests leave the gauge unchanged)
//! - `prng_validation_mean_z` - Mean test Z0
//! - `prng_validation_variance_chi2` - Variance test X0
//! - `prng_validation_ks_d` - Kolmogorov-Smirnov D
//! - `prng_validation_runs_z` - Runs test Z0
//! - `prng_validation_run_count` - Runs test R
//!
//! # Example
//!
//! ```no_run
//! use prng_validation::metrics::{MetricsRegistry, MetricsSnapshot};
//! use prng_validation::{run, SignificanceLevel, Thresholds};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let report = run(
//!     vec![0.12, 0.54, 0.98, 0.33, 0.77],
//!     &Thresholds::Significance(SignificanceLevel::DEFAULT),
//! )
//! .unwrap();
//!
//! registry.update(&MetricsSnapshot::from_report(&report));
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
