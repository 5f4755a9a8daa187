//! Variance test.

use super::{HypothesisTest, TestKind, TestVerdict, VerdictDetails};
use crate::critical::CriticalValues;
use crate::sequence::Sequence;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Compares the sample variance with the Uniform(0,1) variance (1/12).
///
/// `X0 = 12 (n-1) s²` follows approximately a chi-square distribution
/// with n-1 degrees of freedom; the test accepts when X0 falls inside
/// `[chi_low, chi_high]`. Needs at least two observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarianceTest;

impl VarianceTest {
    pub const MIN_SAMPLE: usize = 2;

    pub fn check(values: &[f64], chi_low: f64, chi_high: f64) -> TestVerdict {
        let n = values.len();
        if n < Self::MIN_SAMPLE {
            return TestVerdict::not_applicable(TestKind::Variance, Self::MIN_SAMPLE, n);
        }

        let nf = n as f64;
        let mean = values.iter().sum::<f64>() / nf;
        let sum_sq: f64 = values.iter().map(|&x| (x - mean).powi(2)).sum();
        let sample_variance = sum_sq / (nf - 1.0);
        let x0 = 12.0 * (nf - 1.0) * sample_variance;

        let p_value = ChiSquared::new(nf - 1.0).ok().map(|dist| {
            let lower = dist.cdf(x0);
            (2.0 * lower.min(1.0 - lower)).clamp(0.0, 1.0)
        });

        tracing::trace!(n, sample_variance, x0, chi_low, chi_high, "Variance test");

        TestVerdict::decided(
            TestKind::Variance,
            chi_low <= x0 && x0 <= chi_high,
            x0,
            p_value,
            VerdictDetails::Variance { sample_variance },
        )
    }
}

impl HypothesisTest for VarianceTest {
    fn kind(&self) -> TestKind {
        TestKind::Variance
    }

    fn evaluate(&self, sequence: &Sequence, critical: &CriticalValues) -> TestVerdict {
        Self::check(sequence.values(), critical.chi_low(), critical.chi_high())
    }
}
