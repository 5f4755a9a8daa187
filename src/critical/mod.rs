//! Critical values for the four acceptance tests.
//!
//! Values are either derived from a significance level and sample size
//! (standard-normal, Kolmogorov-Smirnov and chi-square quantiles) or
//! transcribed from printed tables and supplied by the caller. The tests
//! only ever see a [`CriticalValues`] record and cannot tell which.

mod provider;
mod quantile;
mod values;

pub use provider::{CriticalValueProvider, KsMethod};
pub use quantile::{
    chi_square_quantile, chi_square_upper_quantile, ks_coefficient, normal_quantile,
};
pub use values::{CriticalOrigin, CriticalValues, SignificanceLevel, Thresholds};
