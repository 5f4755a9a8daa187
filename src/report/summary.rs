//! Aggregated result of one validation run.

use crate::critical::CriticalValues;
use crate::hypothesis::{TestKind, TestVerdict};
use serde::Serialize;

/// Immutable outcome of a validation run.
///
/// Holds the four verdicts together with the critical values they were
/// judged against and the sample size they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestReport {
    sample_size: usize,
    sample_mean: f64,
    critical_values: CriticalValues,
    mean: TestVerdict,
    variance: TestVerdict,
    conformity: TestVerdict,
    independence: TestVerdict,
}

impl TestReport {
    pub(crate) fn new(
        sample_size: usize,
        sample_mean: f64,
        critical_values: CriticalValues,
        mean: TestVerdict,
        variance: TestVerdict,
        conformity: TestVerdict,
        independence: TestVerdict,
    ) -> Self {
        Self {
            sample_size,
            sample_mean,
            critical_values,
            mean,
            variance,
            conformity,
            independence,
        }
    }

    #[inline]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[inline]
    pub fn sample_mean(&self) -> f64 {
        self.sample_mean
    }

    #[inline]
    pub fn critical_values(&self) -> &CriticalValues {
        &self.critical_values
    }

    /// Significance level, when the critical values were computed.
    pub fn alpha(&self) -> Option<f64> {
        self.critical_values.alpha()
    }

    pub fn mean(&self) -> &TestVerdict {
        &self.mean
    }

    pub fn variance(&self) -> &TestVerdict {
        &self.variance
    }

    pub fn conformity(&self) -> &TestVerdict {
        &self.conformity
    }

    pub fn independence(&self) -> &TestVerdict {
        &self.independence
    }

    /// Looks up a verdict by test.
    pub fn verdict(&self, kind: TestKind) -> &TestVerdict {
        match kind {
            TestKind::Mean => &self.mean,
            TestKind::Variance => &self.variance,
            TestKind::Conformity => &self.conformity,
            TestKind::Independence => &self.independence,
        }
    }

    /// All verdicts in report order.
    pub fn verdicts(&self) -> [&TestVerdict; 4] {
        TestKind::ALL.map(|kind| self.verdict(kind))
    }

    /// Number of tests that applied and failed.
    pub fn failed_count(&self) -> usize {
        self.verdicts()
            .iter()
            .filter(|v| v.passed() == Some(false))
            .count()
    }

    /// True when every applicable test passed.
    ///
    /// Tests that did not apply are ignored, but at least one test must
    /// have applied.
    pub fn all_passed(&self) -> bool {
        let applied: Vec<bool> = self.verdicts().iter().filter_map(|v| v.passed()).collect();
        !applied.is_empty() && applied.iter().all(|&pass| pass)
    }
}

#[cfg(test)]
mod tests {
    use crate::critical::{SignificanceLevel, Thresholds};
    use crate::hypothesis::TestKind;
    use crate::report::run;

    #[test]
    fn test_constant_sequence_statistics() {
        let report = run(
            vec![0.5; 10],
            &Thresholds::Significance(SignificanceLevel::DEFAULT),
        )
        .unwrap();

        assert_eq!(report.mean().statistic, Some(0.0));
        assert_eq!(report.variance().statistic, Some(0.0));
        assert_eq!(report.independence().runs(), Some(1));
        assert!(report.mean().passed().unwrap());
        assert!(!report.all_passed());
    }

    #[test]
    fn test_verdict_lookup_matches_order() {
        let report = run(
            vec![0.1, 0.9, 0.2, 0.8, 0.3],
            &Thresholds::Significance(SignificanceLevel::DEFAULT),
        )
        .unwrap();
        for (verdict, kind) in report.verdicts().iter().zip(TestKind::ALL) {
            assert_eq!(verdict.kind, kind);
            assert_eq!(report.verdict(kind), *verdict);
        }
    }
}
