//! The four acceptance tests for Uniform(0,1) sequences.
//!
//! Each test is a stateless unit struct. They share one calling
//! convention through [`HypothesisTest`] and one output type,
//! [`TestVerdict`], so the engine can drive them uniformly. Every test
//! also exposes a slice-level `check` function with its raw critical
//! value(s) for use outside a full run.
//!
//! | Test | Statistic | Accept when |
//! |------|-----------|-------------|
//! | Mean | `Z0 = (mean - 0.5) / sqrt(1 / 12n)` | `|Z0| <= Z` |
//! | Variance | `X0 = 12 (n-1) s²` | `ChiLow <= X0 <= ChiHigh` |
//! | Conformity | `D = max(D+, D-)` | `D <= Dcrit` |
//! | Independence | `Z0 = (R - μR) / σR` | `|Z0| <= Z` |

mod conformity;
mod independence;
mod mean;
mod variance;
mod verdict;

pub use conformity::ConformityTest;
pub use independence::IndependenceTest;
pub use mean::MeanTest;
pub use variance::VarianceTest;
pub use verdict::{Outcome, TestKind, TestVerdict, VerdictDetails};

use crate::critical::CriticalValues;
use crate::sequence::Sequence;
use statrs::function::erf::erfc;

/// Common capability of the acceptance tests.
pub trait HypothesisTest {
    /// Which test this is.
    fn kind(&self) -> TestKind;

    /// Evaluates the test on a validated sequence.
    ///
    /// `critical` must belong to the same sample size as `sequence`.
    fn evaluate(&self, sequence: &Sequence, critical: &CriticalValues) -> TestVerdict;
}

/// The standard battery, in report order.
pub fn battery() -> [&'static dyn HypothesisTest; 4] {
    [&MeanTest, &VarianceTest, &ConformityTest, &IndependenceTest]
}

/// Two-sided standard-normal p-value for a Z statistic.
fn normal_two_sided_p(z: f64) -> f64 {
    erfc(z.abs() / std::f64::consts::SQRT_2).clamp(0.0, 1.0)
}
