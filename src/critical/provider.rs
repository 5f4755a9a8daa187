//! Critical-value derivation.

use super::quantile::{
    chi_square_quantile, chi_square_upper_quantile, ks_coefficient, normal_quantile,
};
use super::values::{CriticalValues, SignificanceLevel, Thresholds};
use crate::error::{ValidationError, MIN_SAMPLE_SIZE};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classic Kolmogorov-Smirnov table coefficients, c(α) for D = c / sqrt(n).
const KS_TABLE: [(f64, f64); 5] = [
    (0.20, 1.07),
    (0.15, 1.14),
    (0.10, 1.22),
    (0.05, 1.36),
    (0.01, 1.63),
];

/// How the Kolmogorov-Smirnov critical value is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KsMethod {
    /// `sqrt(-ln(α/2) / 2) / sqrt(n)`, valid for any α.
    #[default]
    Asymptotic,
    /// Printed-table coefficients; only the tabulated α values are accepted.
    Table,
}

impl KsMethod {
    fn coefficient(self, alpha: f64) -> Result<f64, ValidationError> {
        match self {
            KsMethod::Asymptotic => ks_coefficient(alpha),
            KsMethod::Table => KS_TABLE
                .iter()
                .find(|(a, _)| (a - alpha).abs() < 1e-9)
                .map(|&(_, c)| c)
                .ok_or_else(|| {
                    ValidationError::invalid(format!(
                        "no tabulated Kolmogorov-Smirnov coefficient for alpha {alpha} \
                         (available: 0.20, 0.15, 0.10, 0.05, 0.01)"
                    ))
                }),
        }
    }
}

impl FromStr for KsMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asymptotic" => Ok(KsMethod::Asymptotic),
            "table" => Ok(KsMethod::Table),
            other => Err(ValidationError::invalid(format!(
                "unknown Kolmogorov-Smirnov method {other:?}"
            ))),
        }
    }
}

/// Produces [`CriticalValues`] from a significance level and sample size.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalValueProvider {
    ks_method: KsMethod,
}

impl CriticalValueProvider {
    pub fn new(ks_method: KsMethod) -> Self {
        Self { ks_method }
    }

    pub fn ks_method(&self) -> KsMethod {
        self.ks_method
    }

    /// Derives all four critical values for `alpha` and `n`.
    ///
    /// - `Z = Φ⁻¹(1 - α/2)`
    /// - `D = c(α) / sqrt(n)`
    /// - `ChiLow = χ²⁻¹(α/2; n-1)`, `ChiHigh = χ²⁻¹(1 - α/2; n-1)`
    ///
    /// Any α in (0, 1) is accepted, however small.
    pub fn compute(&self, alpha: f64, n: usize) -> Result<CriticalValues, ValidationError> {
        let alpha = SignificanceLevel::new(alpha)?;
        self.compute_for(alpha, n)
    }

    /// Same as [`compute`](Self::compute) with an already validated α.
    pub fn compute_for(
        &self,
        alpha: SignificanceLevel,
        n: usize,
    ) -> Result<CriticalValues, ValidationError> {
        if n < MIN_SAMPLE_SIZE {
            return Err(ValidationError::invalid(format!(
                "critical values need n >= {MIN_SAMPLE_SIZE}, got {n}"
            )));
        }
        let a = alpha.value();
        let df = (n - 1) as f64;

        // 1 - α/2 rounds to 1 for tiny α; upper bounds come from the tails.
        let z = -normal_quantile(a / 2.0)?;
        let d = self.ks_method.coefficient(a)? / (n as f64).sqrt();
        let chi_low = chi_square_quantile(a / 2.0, df)?;
        let chi_high = chi_square_upper_quantile(a / 2.0, df)?;

        tracing::debug!(
            alpha = a,
            n,
            z,
            d,
            chi_low,
            chi_high,
            ks_method = ?self.ks_method,
            "Derived critical values"
        );

        Ok(CriticalValues::computed(z, d, chi_low, chi_high, alpha, n))
    }

    /// Accepts caller-supplied values (e.g. transcribed from a table).
    pub fn supplied(
        &self,
        z: f64,
        d: f64,
        chi_low: f64,
        chi_high: f64,
    ) -> Result<CriticalValues, ValidationError> {
        CriticalValues::supplied(z, d, chi_low, chi_high)
    }

    /// Resolves thresholds for a sample of size `n`.
    ///
    /// Supplied values pass through unchanged; computed values must
    /// match `n`.
    pub fn resolve(
        &self,
        thresholds: &Thresholds,
        n: usize,
    ) -> Result<CriticalValues, ValidationError> {
        let values = match thresholds {
            Thresholds::Significance(alpha) => self.compute_for(*alpha, n)?,
            Thresholds::Supplied(values) => *values,
        };
        values.ensure_sample_size(n)?;
        Ok(values)
    }
}
