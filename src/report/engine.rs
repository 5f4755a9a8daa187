//! The validation engine.

use super::TestReport;
use crate::critical::{CriticalValueProvider, KsMethod, Thresholds};
use crate::error::ValidationError;
use crate::hypothesis::{battery, TestKind};
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// Engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How the Kolmogorov-Smirnov critical value is derived from α.
    #[serde(default)]
    pub ks_method: KsMethod,
}

/// Runs the four acceptance tests over a sequence.
///
/// Holds no per-run state; one engine can serve any number of runs,
/// including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine {
    provider: CriticalValueProvider,
}

impl ValidationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            provider: CriticalValueProvider::new(config.ks_method),
        }
    }

    /// Returns the critical-value provider used by this engine.
    pub fn provider(&self) -> &CriticalValueProvider {
        &self.provider
    }

    /// Validates `values` and runs every test.
    ///
    /// Blocking errors (out-of-range input, short sample, bad parameters)
    /// abort the run; tests that merely do not apply to a small sample
    /// are reported as such inside an otherwise complete report.
    pub fn run(
        &self,
        values: impl Into<Vec<f64>>,
        thresholds: &Thresholds,
    ) -> Result<TestReport, ValidationError> {
        let sequence = Sequence::new(values.into())?;
        self.run_sequence(&sequence, thresholds)
    }

    /// Runs every test over an already validated sequence.
    pub fn run_sequence(
        &self,
        sequence: &Sequence,
        thresholds: &Thresholds,
    ) -> Result<TestReport, ValidationError> {
        let n = sequence.len();
        let critical = self.provider.resolve(thresholds, n)?;

        let [mean, variance, conformity, independence] =
            battery().map(|test| test.evaluate(sequence, &critical));
        debug_assert_eq!(
            [mean.kind, variance.kind, conformity.kind, independence.kind],
            TestKind::ALL
        );

        let report = TestReport::new(
            n,
            sequence.mean(),
            critical,
            mean,
            variance,
            conformity,
            independence,
        );

        tracing::info!(
            n,
            origin = ?critical.origin(),
            all_passed = report.all_passed(),
            failed = report.failed_count(),
            "Validation run complete"
        );

        Ok(report)
    }
}

/// Runs the tests with a default engine.
pub fn run(
    values: impl Into<Vec<f64>>,
    thresholds: &Thresholds,
) -> Result<TestReport, ValidationError> {
    ValidationEngine::default().run(values, thresholds)
}
