//! Tabular rendering of a [`TestReport`].

use super::TestReport;
use crate::critical::CriticalOrigin;
use crate::hypothesis::{TestKind, TestVerdict, VerdictDetails};
use serde::Serialize;
use std::fmt;

const DEFAULT_DECIMALS: usize = 4;

/// One line of the results table: test name → verdict and statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub test: &'static str,
    pub verdict: &'static str,
    pub statistic: Option<f64>,
    pub criterion: String,
}

impl TestReport {
    /// Results as table rows, in report order.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.verdicts()
            .iter()
            .map(|v| ReportRow {
                test: v.kind.name(),
                verdict: v.outcome.label(),
                statistic: v.statistic,
                criterion: self.criterion(v.kind, DEFAULT_DECIMALS),
            })
            .collect()
    }

    fn criterion(&self, kind: TestKind, decimals: usize) -> String {
        let cv = self.critical_values();
        let p = decimals;
        match kind {
            TestKind::Mean | TestKind::Independence => format!("|Z0| <= {:.p$}", cv.z()),
            TestKind::Variance => {
                format!("{:.p$} <= X0 <= {:.p$}", cv.chi_low(), cv.chi_high())
            }
            TestKind::Conformity => format!("D <= {:.p$}", cv.d()),
        }
    }
}

fn statistic_cell(verdict: &TestVerdict, p: usize) -> String {
    match verdict.statistic {
        Some(value) => format!("{} = {value:.p$}", verdict.kind.statistic_symbol()),
        None => "N/A".to_string(),
    }
}

impl fmt::Display for TestReport {
    /// Markdown table plus a statistics section.
    ///
    /// The precision flag (`{:.6}`) controls decimals; default is 4.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_DECIMALS);

        match self.alpha() {
            Some(alpha) => writeln!(f, "## Results (n = {}, alpha = {alpha})", self.sample_size())?,
            None => writeln!(f, "## Results (n = {})", self.sample_size())?,
        }
        writeln!(f)?;
        writeln!(f, "| Test | Result | Statistic | Criterion |")?;
        writeln!(f, "| :--- | :--- | :--- | :--- |")?;
        for verdict in self.verdicts() {
            writeln!(
                f,
                "| **{}** | {} | {} | {} |",
                verdict.kind.name(),
                verdict.outcome,
                statistic_cell(verdict, p),
                self.criterion(verdict.kind, p),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "### Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Sample mean: {:.p$}", self.sample_mean(), p = p + 1)?;

        match self.variance().details {
            VerdictDetails::Variance { sample_variance } => writeln!(
                f,
                "- X0 (variance): {:.p$} (s² = {sample_variance:.p$})",
                self.variance().statistic.unwrap_or_default(),
            )?,
            _ => writeln!(f, "- X0 (variance): N/A")?,
        }

        match self.conformity().details {
            VerdictDetails::Conformity { d_plus, d_minus } => writeln!(
                f,
                "- D (K-S): {:.p$} (D+ = {d_plus:.p$}, D- = {d_minus:.p$})",
                self.conformity().statistic.unwrap_or_default(),
            )?,
            _ => writeln!(f, "- D (K-S): N/A")?,
        }

        match self.independence().details {
            VerdictDetails::Independence {
                runs,
                expected_runs,
                ..
            } => writeln!(
                f,
                "- Z0 (runs): {:.p$} (runs R = {runs}, expected {expected_runs:.p$})",
                self.independence().statistic.unwrap_or_default(),
            )?,
            _ => writeln!(f, "- Z0 (runs): N/A")?,
        }

        let cv = self.critical_values();
        let origin = match cv.origin() {
            CriticalOrigin::Computed { .. } => "computed",
            CriticalOrigin::Supplied => "supplied",
        };
        write!(
            f,
            "- Critical values ({origin}): Z = {:.p$}, D = {:.p$}, chi-square = [{:.p$}, {:.p$}]",
            cv.z(),
            cv.d(),
            cv.chi_low(),
            cv.chi_high(),
        )
    }
}
