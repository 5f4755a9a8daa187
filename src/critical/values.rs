//! Significance level and critical-value records.

use crate::error::ValidationError;
use serde::Serialize;

/// Significance level α, guaranteed to lie strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Conventional default, α = 0.05.
    pub const DEFAULT: SignificanceLevel = SignificanceLevel(0.05);

    pub fn new(alpha: f64) -> Result<Self, ValidationError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ValidationError::invalid(format!(
                "significance level {alpha} must lie in (0, 1)"
            )));
        }
        Ok(Self(alpha))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a [`CriticalValues`] record came to be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CriticalOrigin {
    /// Derived from quantile functions for this α and n.
    Computed { alpha: f64, sample_size: usize },
    /// Provided directly by the caller.
    Supplied,
}

/// Thresholds shared by the four tests.
///
/// A value object: it is rebuilt whenever α or n changes and never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalValues {
    z: f64,
    d: f64,
    chi_low: f64,
    chi_high: f64,
    origin: CriticalOrigin,
}

impl CriticalValues {
    /// Accepts externally supplied values after sanity checks.
    ///
    /// Z and D must be finite and non-negative; the chi-square interval
    /// must be finite with `0 <= chi_low <= chi_high`.
    pub fn supplied(z: f64, d: f64, chi_low: f64, chi_high: f64) -> Result<Self, ValidationError> {
        for (name, value) in [("Z", z), ("D", d), ("ChiLow", chi_low), ("ChiHigh", chi_high)] {
            if !value.is_finite() {
                return Err(ValidationError::invalid(format!(
                    "critical value {name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(ValidationError::invalid(format!(
                    "critical value {name} must be non-negative, got {value}"
                )));
            }
        }
        if chi_low > chi_high {
            return Err(ValidationError::invalid(format!(
                "chi-square interval is empty: ChiLow {chi_low} > ChiHigh {chi_high}"
            )));
        }

        Ok(Self {
            z,
            d,
            chi_low,
            chi_high,
            origin: CriticalOrigin::Supplied,
        })
    }

    pub(crate) fn computed(
        z: f64,
        d: f64,
        chi_low: f64,
        chi_high: f64,
        alpha: SignificanceLevel,
        sample_size: usize,
    ) -> Self {
        Self {
            z,
            d,
            chi_low,
            chi_high,
            origin: CriticalOrigin::Computed {
                alpha: alpha.value(),
                sample_size,
            },
        }
    }

    /// Two-sided standard-normal critical value.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Kolmogorov-Smirnov critical value.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Lower chi-square quantile (α/2, n-1 degrees of freedom).
    #[inline]
    pub fn chi_low(&self) -> f64 {
        self.chi_low
    }

    /// Upper chi-square quantile (1-α/2, n-1 degrees of freedom).
    #[inline]
    pub fn chi_high(&self) -> f64 {
        self.chi_high
    }

    #[inline]
    pub fn origin(&self) -> CriticalOrigin {
        self.origin
    }

    /// Significance level, when the values were computed from one.
    pub fn alpha(&self) -> Option<f64> {
        match self.origin {
            CriticalOrigin::Computed { alpha, .. } => Some(alpha),
            CriticalOrigin::Supplied => None,
        }
    }

    /// Rejects computed values that belong to a different sample size.
    ///
    /// Supplied values carry no sample size and always pass.
    pub fn ensure_sample_size(&self, n: usize) -> Result<(), ValidationError> {
        match self.origin {
            CriticalOrigin::Computed { sample_size, .. } if sample_size != n => {
                Err(ValidationError::invalid(format!(
                    "critical values were computed for n={sample_size}, sequence has n={n}"
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for CriticalValues {
    /// Placeholder table values: Z = 1.96, D = 0.1, chi-square in [0, 20].
    fn default() -> Self {
        Self {
            z: 1.96,
            d: 0.1,
            chi_low: 0.0,
            chi_high: 20.0,
            origin: CriticalOrigin::Supplied,
        }
    }
}

/// Either a significance level to derive critical values from, or a
/// ready-made record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thresholds {
    Significance(SignificanceLevel),
    Supplied(CriticalValues),
}

impl From<SignificanceLevel> for Thresholds {
    fn from(alpha: SignificanceLevel) -> Self {
        Self::Significance(alpha)
    }
}

impl From<CriticalValues> for Thresholds {
    fn from(values: CriticalValues) -> Self {
        Self::Supplied(values)
    }
}
