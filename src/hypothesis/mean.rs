//! Mean test.
//!
//! Standardizes the sample mean against the Uniform(0,1) mean (0.5) and
//! variance (1/12) using the normal approximation to its sampling
//! distribution.

use super::{normal_two_sided_p, HypothesisTest, TestKind, TestVerdict, VerdictDetails};
use crate::critical::CriticalValues;
use crate::sequence::Sequence;

/// Expected value of a Uniform(0,1) variable.
const UNIFORM_MEAN: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanTest;

impl MeanTest {
    /// `Z0 = (mean - 0.5) / sqrt(1 / (12 n))`, accepted when `|Z0| <= z_critical`.
    pub fn check(values: &[f64], z_critical: f64) -> TestVerdict {
        let n = values.len();
        if n == 0 {
            return TestVerdict::not_applicable(TestKind::Mean, 1, 0);
        }

        let nf = n as f64;
        let sample_mean = values.iter().sum::<f64>() / nf;
        let z0 = (sample_mean - UNIFORM_MEAN) / (1.0 / (12.0 * nf)).sqrt();

        tracing::trace!(n, sample_mean, z0, z_critical, "Mean test");

        TestVerdict::decided(
            TestKind::Mean,
            z0.abs() <= z_critical,
            z0,
            Some(normal_two_sided_p(z0)),
            VerdictDetails::Mean { sample_mean },
        )
    }
}

impl HypothesisTest for MeanTest {
    fn kind(&self) -> TestKind {
        TestKind::Mean
    }

    fn evaluate(&self, sequence: &Sequence, critical: &CriticalValues) -> TestVerdict {
        Self::check(sequence.values(), critical.z())
    }
}
