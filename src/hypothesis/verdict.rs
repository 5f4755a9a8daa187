//! Per-test outcome records.

use serde::Serialize;
use std::fmt;

/// Identifies one of the four acceptance tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Mean,
    Variance,
    Conformity,
    Independence,
}

impl TestKind {
    /// All tests in report order.
    pub const ALL: [TestKind; 4] = [
        TestKind::Mean,
        TestKind::Variance,
        TestKind::Conformity,
        TestKind::Independence,
    ];

    /// Human-readable test name.
    pub fn name(self) -> &'static str {
        match self {
            TestKind::Mean => "Mean",
            TestKind::Variance => "Variance",
            TestKind::Conformity => "Conformity (K-S)",
            TestKind::Independence => "Independence (runs)",
        }
    }

    /// Symbol of the test statistic.
    pub fn statistic_symbol(self) -> &'static str {
        match self {
            TestKind::Mean | TestKind::Independence => "Z0",
            TestKind::Variance => "X0",
            TestKind::Conformity => "D",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of comparing a statistic with its critical value(s).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    /// The sample is too small for this test. Not a failure.
    NotApplicable { reason: String },
}

impl Outcome {
    pub(crate) fn from_pass(pass: bool) -> Self {
        if pass {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub(crate) fn not_applicable(needed: usize, got: usize) -> Self {
        Outcome::NotApplicable {
            reason: format!("needs n >= {needed}, got {got}"),
        }
    }

    /// `Some(pass)` when the test applied, `None` otherwise.
    pub fn passed(&self) -> Option<bool> {
        match self {
            Outcome::Pass => Some(true),
            Outcome::Fail => Some(false),
            Outcome::NotApplicable { .. } => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, Outcome::NotApplicable { .. })
    }

    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::NotApplicable { .. } => "N/A",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotApplicable { reason } => write!(f, "N/A ({reason})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Intermediate quantities behind a statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum VerdictDetails {
    Mean {
        sample_mean: f64,
    },
    Variance {
        sample_variance: f64,
    },
    Conformity {
        d_plus: f64,
        d_minus: f64,
    },
    Independence {
        runs: usize,
        expected_runs: f64,
        runs_variance: f64,
    },
    None,
}

/// Verdict and statistic of a single test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestVerdict {
    pub kind: TestKind,
    pub outcome: Outcome,
    /// Test statistic; `None` only when the test did not apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<f64>,
    /// Informational p-value. The outcome is decided by the critical
    /// values, not by this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
    pub details: VerdictDetails,
}

impl TestVerdict {
    pub(crate) fn decided(
        kind: TestKind,
        pass: bool,
        statistic: f64,
        p_value: Option<f64>,
        details: VerdictDetails,
    ) -> Self {
        Self {
            kind,
            outcome: Outcome::from_pass(pass),
            statistic: Some(statistic),
            p_value,
            details,
        }
    }

    pub(crate) fn not_applicable(kind: TestKind, needed: usize, got: usize) -> Self {
        Self {
            kind,
            outcome: Outcome::not_applicable(needed, got),
            statistic: None,
            p_value: None,
            details: VerdictDetails::None,
        }
    }

    /// `Some(pass)` when the test applied.
    pub fn passed(&self) -> Option<bool> {
        self.outcome.passed()
    }

    /// Run count R for the independence test.
    pub fn runs(&self) -> Option<usize> {
        match self.details {
            VerdictDetails::Independence { runs, .. } => Some(runs),
            _ => None,
        }
    }
}
