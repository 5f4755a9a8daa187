//! Quantile functions behind the critical values.

use crate::error::ValidationError;
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF, Normal};

const MAX_ITERATIONS: usize = 200;

fn standard_normal() -> Result<Normal, ValidationError> {
    Normal::new(0.0, 1.0).map_err(|e| ValidationError::invalid(e.to_string()))
}

fn check_probability(p: f64) -> Result<(), ValidationError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ValidationError::invalid(format!(
            "probability {p} must lie in (0, 1)"
        )));
    }
    Ok(())
}

/// Standard-normal quantile Φ⁻¹(p).
pub fn normal_quantile(p: f64) -> Result<f64, ValidationError> {
    check_probability(p)?;
    Ok(standard_normal()?.inverse_cdf(p))
}

/// Which tail a chi-square probability refers to.
#[derive(Clone, Copy)]
enum Tail {
    /// `P(X <= x) = p`
    Lower,
    /// `P(X > x) = p`
    Upper,
}

/// Chi-square quantile with `df` degrees of freedom.
///
/// Starts from the Wilson-Hilferty approximation and refines with
/// Newton steps on the exact CDF, falling back to bisection whenever a
/// step leaves the current bracket.
pub fn chi_square_quantile(p: f64, df: f64) -> Result<f64, ValidationError> {
    chi_square_solve(p, df, Tail::Lower)
}

/// Chi-square value with upper-tail probability `q`, i.e. the
/// `1 - q` quantile.
///
/// Solved on the survival function, so it stays accurate when `1 - q`
/// rounds to 1.
pub fn chi_square_upper_quantile(q: f64, df: f64) -> Result<f64, ValidationError> {
    chi_square_solve(q, df, Tail::Upper)
}

fn chi_square_solve(p: f64, df: f64, tail: Tail) -> Result<f64, ValidationError> {
    check_probability(p)?;
    if !(df > 0.0 && df.is_finite()) {
        return Err(ValidationError::invalid(format!(
            "chi-square degrees of freedom must be positive, got {df}"
        )));
    }
    let dist = ChiSquared::new(df).map_err(|e| ValidationError::invalid(e.to_string()))?;

    // Increasing in x, zero at the root.
    let residual = |x: f64| match tail {
        Tail::Lower => dist.cdf(x) - p,
        Tail::Upper => p - dist.sf(x),
    };

    let mut lo = 0.0_f64;
    let mut hi = df + 10.0 * (2.0 * df).sqrt() + 10.0;
    while residual(hi) < 0.0 {
        lo = hi;
        hi *= 2.0;
    }

    let z = match tail {
        Tail::Lower => normal_quantile(p)?,
        Tail::Upper => -normal_quantile(p)?,
    };
    let h = 2.0 / (9.0 * df);
    let wilson_hilferty = df * (1.0 - h + z * h.sqrt()).powi(3);
    let mut x = if wilson_hilferty > lo && wilson_hilferty < hi {
        wilson_hilferty
    } else {
        0.5 * (lo + hi)
    };

    for _ in 0..MAX_ITERATIONS {
        let f = residual(x);
        if f == 0.0 {
            break;
        }
        if f < 0.0 {
            lo = x;
        } else {
            hi = x;
        }

        let density = dist.pdf(x);
        let newton = x - f / density;
        let next = if newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if (next - x).abs() <= 1e-14 * x.max(1e-300) || hi - lo <= 1e-15 * hi {
            x = next;
            break;
        }
        x = next;
    }

    Ok(x)
}

/// Asymptotic Kolmogorov-Smirnov coefficient c(α) = sqrt(-ln(α/2) / 2).
///
/// The two-sided critical value for large n is `c(α) / sqrt(n)`.
pub fn ks_coefficient(alpha: f64) -> Result<f64, ValidationError> {
    check_probability(alpha)?;
    Ok((-0.5 * (alpha / 2.0).ln()).sqrt())
}
