//! Metrics collection and registry.

use crate::report::TestReport;
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// The figures of one validation run that are exported.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Sample size n.
    pub sample_size: usize,
    /// Tests that applied and failed.
    pub tests_failed: usize,
    /// Every applicable test passed.
    pub accepted: bool,
    /// Mean test statistic.
    pub mean_z: Option<f64>,
    /// Variance test statistic.
    pub variance_chi2: Option<f64>,
    /// Kolmogorov-Smirnov statistic.
    pub ks_d: Option<f64>,
    /// Runs test statistic.
    pub runs_z: Option<f64>,
    /// Runs test run count.
    pub run_count: Option<usize>,
}

impl MetricsSnapshot {
    /// Extracts the exported figures from a report.
    pub fn from_report(report: &TestReport) -> Self {
        Self {
            sample_size: report.sample_size(),
            tests_failed: report.failed_count(),
            accepted: report.all_passed(),
            mean_z: report.mean().statistic,
            variance_chi2: report.variance().statistic,
            ks_d: report.conformity().statistic,
            runs_z: report.independence().statistic,
            run_count: report.independence().runs(),
        }
    }
}

/// Prometheus metrics registry for validation runs.
pub struct MetricsRegistry {
    registry: Registry,

    // Run metrics
    runs_total: IntCounter,
    runs_rejected_total: IntCounter,
    sample_size: IntGauge,
    tests_failed: IntGauge,

    // Statistic metrics
    mean_z: Gauge,
    variance_chi2: Gauge,
    ks_d: Gauge,
    runs_z: Gauge,
    run_count: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all validation metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let runs_total = IntCounter::new(
            "prng_validation_runs_total",
            "Total number of validation runs recorded",
        )?;
        let runs_rejected_total = IntCounter::new(
            "prng_validation_runs_rejected_total",
            "Validation runs with at least one failed test",
        )?;
        let sample_size = IntGauge::new(
            "prng_validation_sample_size",
            "Sample size of the latest validation run",
        )?;
        let tests_failed = IntGauge::new(
            "prng_validation_tests_failed",
            "Number of failed tests in the latest validation run",
        )?;

        let mean_z = Gauge::new("prng_validation_mean_z", "Mean test statistic Z0")?;
        let variance_chi2 = Gauge::new(
            "prng_validation_variance_chi2",
            "Variance test statistic X0 = 12 (n-1) s^2",
        )?;
        let ks_d = Gauge::new("prng_validation_ks_d", "Kolmogorov-Smirnov statistic D")?;
        let runs_z = Gauge::new("prng_validation_runs_z", "Runs test statistic Z0")?;
        let run_count = IntGauge::new(
            "prng_validation_run_count",
            "Runs counted by the peaks-and-valleys test",
        )?;

        registry.register(Box::new(runs_total.clone()))?;
        registry.register(Box::new(runs_rejected_total.clone()))?;
        registry.register(Box::new(sample_size.clone()))?;
        registry.register(Box::new(tests_failed.clone()))?;
        registry.register(Box::new(mean_z.clone()))?;
        registry.register(Box::new(variance_chi2.clone()))?;
        registry.register(Box::new(ks_d.clone()))?;
        registry.register(Box::new(runs_z.clone()))?;
        registry.register(Box::new(run_count.clone()))?;

        Ok(Self {
            registry,
            runs_total,
            runs_rejected_total,
            sample_size,
            tests_failed,
            mean_z,
            variance_chi2,
            ks_d,
            runs_z,
            run_count,
        })
    }

    /// Records one validation run.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        self.runs_total.inc();
        if !snapshot.accepted {
            self.runs_rejected_total.inc();
        }
        self.sample_size.set(snapshot.sample_size as i64);
        self.tests_failed.set(snapshot.tests_failed as i64);

        // Statistics of tests that did not apply are left as they were
        if let Some(z) = snapshot.mean_z {
            self.mean_z.set(z);
        }
        if let Some(x0) = snapshot.variance_chi2 {
            self.variance_chi2.set(x0);
        }
        if let Some(d) = snapshot.ks_d {
            self.ks_d.set(d);
        }
        if let Some(z) = snapshot.runs_z {
            self.runs_z.set(z);
        }
        if let Some(r) = snapshot.run_count {
            self.run_count.set(r as i64);
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
