//! Error taxonomy for a validation run.
//!
//! Every variant here blocks the whole run: no partial report is
//! produced. Per-test "not applicable" outcomes are not errors and
//! live in [`crate::hypothesis::Outcome`] instead.

use thiserror::Error;

/// Minimum sample size accepted by the engine.
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Errors that abort a validation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A value lies outside [0, 1] (NaN and infinities included).
    #[error("value {value} at index {index} is outside [0, 1]")]
    OutOfRangeInput { index: usize, value: f64 },

    /// Fewer observations than any test can use.
    #[error("insufficient sample: got {got} values, need at least {required}")]
    InsufficientSample { got: usize, required: usize },

    /// Significance level or critical values are unusable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ValidationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
