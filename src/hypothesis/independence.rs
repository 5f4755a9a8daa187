//! Runs test for serial independence (peaks and valleys).
//!
//! Every strict turning point of the sequence starts a new run. Under
//! independence the run count R is approximately normal with
//! `μR = (2n - 1) / 3` and `σ²R = (16n - 29) / 90`.

use super::{normal_two_sided_p, HypothesisTest, TestKind, TestVerdict, VerdictDetails};
use crate::critical::CriticalValues;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, Default)]
pub struct IndependenceTest;

impl IndependenceTest {
    pub const MIN_SAMPLE: usize = 3;

    /// Counts runs: one plus the number of strict peaks and valleys.
    ///
    /// Element `i-1` is a peak when `x[i-2] < x[i-1] > x[i]` and a valley
    /// when `x[i-2] > x[i-1] < x[i]`. Ties never form a turning point.
    pub fn count_runs(values: &[f64]) -> usize {
        1 + values
            .windows(3)
            .filter(|w| {
                let (before, middle, after) = (w[0], w[1], w[2]);
                (after > middle && middle < before) || (after < middle && middle > before)
            })
            .count()
    }

    /// `Z0 = (R - μR) / σR`, accepted when `|Z0| <= z_critical`.
    pub fn check(values: &[f64], z_critical: f64) -> TestVerdict {
        let n = values.len();
        if n < Self::MIN_SAMPLE {
            return TestVerdict::not_applicable(TestKind::Independence, Self::MIN_SAMPLE, n);
        }

        let nf = n as f64;
        let runs = Self::count_runs(values);
        let expected_runs = (2.0 * nf - 1.0) / 3.0;
        let runs_variance = (16.0 * nf - 29.0) / 90.0;
        let z0 = (runs as f64 - expected_runs) / runs_variance.sqrt();

        tracing::trace!(n, runs, expected_runs, runs_variance, z0, z_critical, "Runs test");

        TestVerdict::decided(
            TestKind::Independence,
            z0.abs() <= z_critical,
            z0,
            Some(normal_two_sided_p(z0)),
            VerdictDetails::Independence {
                runs,
                expected_runs,
                runs_variance,
            },
        )
    }
}

impl HypothesisTest for IndependenceTest {
    fn kind(&self) -> TestKind {
        TestKind::Independence
    }

    fn evaluate(&self, sequence: &Sequence, critical: &CriticalValues) -> TestVerdict {
        Self::check(sequence.values(), critical.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Outcome;
    use proptest::prelude::*;

    #[test]
    fn test_alternating_is_maximal() {
        let values = [0.1, 0.9, 0.2, 0.8, 0.3];
        assert_eq!(IndependenceTest::count_runs(&values), values.len() - 1);

        // mu = 3, sigma^2 = 51/90
        let verdict = IndependenceTest::check(&values, 1.96);
        let z0 = verdict.statistic.unwrap();
        assert!((z0 - 1.0 / (51.0f64 / 90.0).sqrt()).abs() < 1e-12);
        assert_eq!(verdict.runs(), Some(4));
        assert_eq!(verdict.outcome, Outcome::Pass);
    }

    #[test]
    fn test_monotonic_is_minimal() {
        let increasing: Vec<f64> = (0..30).map(|i| i as f64 / 30.0).collect();
        let decreasing: Vec<f64> = increasing.iter().rev().copied().collect();

        for values in [&increasing, &decreasing] {
            assert_eq!(IndependenceTest::count_runs(values), 1);
            let verdict = IndependenceTest::check(values, 1.96);
            assert!(verdict.statistic.unwrap() < -1.96);
            assert_eq!(verdict.outcome, Outcome::Fail);
        }
    }

    #[test]
    fn test_constant_has_no_turning_points() {
        let values = [0.5; 12];
        assert_eq!(IndependenceTest::count_runs(&values), 1);
        assert_eq!(IndependenceTest::check(&values, 1.96).runs(), Some(1));
    }

    #[test]
    fn test_ties_are_not_extrema() {
        // Plateau at the top: 0.2 < 0.8 == 0.8 > 0.1, no strict peak.
        assert_eq!(IndependenceTest::count_runs(&[0.2, 0.8, 0.8, 0.1]), 1);
        // A genuine peak followed by a tie.
        assert_eq!(IndependenceTest::count_runs(&[0.2, 0.8, 0.3, 0.3]), 2);
    }

    #[test]
    fn test_short_sequences_not_applicable() {
        let verdict = IndependenceTest::check(&[0.1, 0.9], 1.96);
        assert_eq!(verdict.passed(), None);
        assert_eq!(verdict.statistic, None);
        assert_eq!(verdict.runs(), None);
    }

    #[test]
    fn test_three_values_evaluated() {
        let verdict = IndependenceTest::check(&[0.1, 0.9, 0.2], 1.96);
        assert_eq!(verdict.runs(), Some(2));
        assert!(verdict.outcome.is_applicable());
    }

    proptest! {
        #[test]
        fn prop_runs_bounded(values in prop::collection::vec(0.0f64..=1.0, 3..200)) {
            let runs = IndependenceTest::count_runs(&values);
            prop_assert!(runs >= 1);
            prop_assert!(runs <= values.len() - 1);
        }
    }
}
