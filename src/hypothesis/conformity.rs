//! Kolmogorov-Smirnov conformity test against the Uniform(0,1) CDF.

use super::{HypothesisTest, TestKind, TestVerdict, VerdictDetails};
use crate::critical::CriticalValues;
use crate::sequence::Sequence;
use std::f64::consts::PI;

/// Two-sided one-sample Kolmogorov-Smirnov test.
///
/// Sorts a copy of the sample into order statistics `x(1) <= ... <= x(n)`
/// and measures the largest gap between the empirical CDF and F(x) = x:
///
/// - `D+ = max_i (i/n - x(i))`
/// - `D- = max_i (x(i) - (i-1)/n)`
/// - `D  = max(D+, D-)`
///
/// The sort dominates the cost, O(n log n). The caller's sequence is
/// left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConformityTest;

impl ConformityTest {
    pub fn check(values: &[f64], d_critical: f64) -> TestVerdict {
        let n = values.len();
        if n == 0 {
            return TestVerdict::not_applicable(TestKind::Conformity, 1, 0);
        }

        let (d_plus, d_minus) = Self::deviations(values);
        let d = d_plus.max(d_minus);

        tracing::trace!(n, d_plus, d_minus, d, d_critical, "Conformity test");

        TestVerdict::decided(
            TestKind::Conformity,
            d <= d_critical,
            d,
            Some(kolmogorov_p_value(d, n)),
            VerdictDetails::Conformity { d_plus, d_minus },
        )
    }

    /// Returns `(D+, D-)` for a non-empty sample.
    pub fn deviations(values: &[f64]) -> (f64, f64) {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let nf = sorted.len() as f64;
        sorted.iter().enumerate().fold(
            (f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(d_plus, d_minus), (i, &x)| {
                let rank = (i + 1) as f64;
                (
                    d_plus.max(rank / nf - x),
                    d_minus.max(x - (rank - 1.0) / nf),
                )
            },
        )
    }
}

/// Asymptotic Kolmogorov distribution tail, with Stephens' small-sample
/// scaling of the statistic.
///
/// Uses the theta-function form of the CDF for small λ, where the usual
/// alternating series converges too slowly.
fn kolmogorov_p_value(d: f64, n: usize) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    if lambda < 1e-3 {
        return 1.0;
    }

    if lambda < 1.18 {
        let scale = PI * PI / (8.0 * lambda * lambda);
        let cdf: f64 = (1..=10)
            .map(|k| {
                let odd = (2 * k - 1) as f64;
                (-odd * odd * scale).exp()
            })
            .sum::<f64>()
            * (2.0 * PI).sqrt()
            / lambda;
        return (1.0 - cdf).clamp(0.0, 1.0);
    }

    let mut sum = 0.0;
    for k in 1..=100i32 {
        let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
        let term = (-2.0 * (k as f64 * lambda).powi(2)).exp();
        sum += sign * term;
        if term < 1e-16 {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

impl HypothesisTest for ConformityTest {
    fn kind(&self) -> TestKind {
        TestKind::Conformity
    }

    fn evaluate(&self, sequence: &Sequence, critical: &CriticalValues) -> TestVerdict {
        Self::check(sequence.values(), critical.d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis::Outcome;
    use proptest::prelude::*;

    #[test]
    fn test_known_example() {
        // Sorted: [0.12, 0.33, 0.54, 0.77, 0.98]
        // i/n - x:     0.08, 0.07, 0.06, 0.03, 0.02  -> D+ = 0.08
        // x - (i-1)/n: 0.12, 0.13, 0.14, 0.17, 0.18  -> D- = 0.18
        let values = [0.12, 0.54, 0.98, 0.33, 0.77];
        let (d_plus, d_minus) = ConformityTest::deviations(&values);
        assert!((d_plus - 0.08).abs() < 1e-12);
        assert!((d_minus - 0.18).abs() < 1e-12);

        let verdict = ConformityTest::check(&values, 1.36 / 5f64.sqrt());
        assert!((verdict.statistic.unwrap() - 0.18).abs() < 1e-12);
        assert_eq!(verdict.outcome, Outcome::Pass);
    }

    #[test]
    fn test_input_not_reordered() {
        let values = vec![0.9, 0.1, 0.5];
        let _ = ConformityTest::check(&values, 0.5);
        assert_eq!(values, vec![0.9, 0.1, 0.5]);
    }

    #[test]
    fn test_clustered_sample_fails() {
        let values: Vec<f64> = (0..40).map(|i| 0.9 + i as f64 * 0.001).collect();
        let verdict = ConformityTest::check(&values, 1.36 / 40f64.sqrt());
        assert!(verdict.statistic.unwrap() > 0.85);
        assert_eq!(verdict.outcome, Outcome::Fail);
        assert!(verdict.p_value.unwrap() < 1e-6);
    }

    #[test]
    fn test_evenly_spaced_sample_is_tight() {
        // Midpoints (i - 0.5)/n give D = 1/(2n).
        let n = 50;
        let values: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let verdict = ConformityTest::check(&values, 1.36 / (n as f64).sqrt());
        assert!((verdict.statistic.unwrap() - 0.01).abs() < 1e-12);
        assert_eq!(verdict.outcome, Outcome::Pass);
        assert!(verdict.p_value.unwrap() > 0.99);
    }

    #[test]
    fn test_p_value_continuous_across_series_switch() {
        // Both branches describe the same distribution.
        let below = kolmogorov_p_value(1.1799 / 10.1311, 100);
        let above = kolmogorov_p_value(1.1801 / 10.1311, 100);
        assert!((below - above).abs() < 1e-3);
        // Q(1.36) is close to 0.05.
        let q = kolmogorov_p_value(1.36 / 10.1311, 100);
        assert!((q - 0.0493).abs() < 2e-3);
    }

    #[test]
    fn test_two_values_still_evaluated() {
        let verdict = ConformityTest::check(&[0.25, 0.75], 0.96);
        assert!(verdict.outcome.is_applicable());
        assert!((verdict.statistic.unwrap() - 0.25).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_statistic_bounds(values in prop::collection::vec(0.0f64..=1.0, 1..200)) {
            let (d_plus, d_minus) = ConformityTest::deviations(&values);
            prop_assert!(d_plus >= 0.0);
            prop_assert!(d_minus >= 0.0);
            let d = d_plus.max(d_minus);
            prop_assert!(d <= 1.0);
        }

        #[test]
        fn prop_permutation_invariant(
            (values, shuffled) in prop::collection::vec(0.0f64..=1.0, 2..100)
                .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle())),
        ) {
            let original = ConformityTest::check(&values, 0.5).statistic;
            let permuted = ConformityTest::check(&shuffled, 0.5).statistic;
            prop_assert_eq!(original, permuted);
        }
    }
}
