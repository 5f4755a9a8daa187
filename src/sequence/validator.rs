//! Validated sequence of observations.

use crate::error::{ValidationError, MIN_SAMPLE_SIZE};

/// An ordered sample of values in [0, 1], at least two long.
///
/// Construction is the only place the range and length checks happen;
/// once built the sequence is immutable and every test can rely on it.
#[derive(Clone, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Validates raw values and wraps them.
    ///
    /// The range check runs before the length check so that a single
    /// bad value is reported as such rather than as a short sample.
    pub fn new(values: Vec<f64>) -> Result<Self, ValidationError> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            tracing::warn!(index, value, "Rejected out-of-range input");
            return Err(ValidationError::OutOfRangeInput { index, value });
        }

        if values.len() < MIN_SAMPLE_SIZE {
            tracing::warn!(n = values.len(), "Rejected short sample");
            return Err(ValidationError::InsufficientSample {
                got: values.len(),
                required: MIN_SAMPLE_SIZE,
            });
        }

        Ok(Self { values })
    }

    /// Returns the observations in their original order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the sample size n.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the observations.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Consumes the sequence, returning the raw values.
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("n", &self.values.len())
            .field("mean", &format!("{:.5}", self.mean()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_closed_interval_bounds() {
        let seq = Sequence::new(vec![0.0, 1.0, 0.5]).unwrap();
        assert_eq!(seq.len(), 3);
        assert!((seq.mean() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let result = Sequence::new(vec![0.2, 1.01, 0.3]);
        assert_eq!(
            result,
            Err(ValidationError::OutOfRangeInput {
                index: 1,
                value: 1.01
            })
        );

        assert!(matches!(
            Sequence::new(vec![-0.0001, 0.5]),
            Err(ValidationError::OutOfRangeInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        assert!(matches!(
            Sequence::new(vec![0.5, f64::NAN]),
            Err(ValidationError::OutOfRangeInput { index: 1, .. })
        ));
        assert!(matches!(
            Sequence::new(vec![f64::INFINITY, 0.5]),
            Err(ValidationError::OutOfRangeInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_short_sample() {
        assert_eq!(
            Sequence::new(vec![0.4]),
            Err(ValidationError::InsufficientSample {
                got: 1,
                required: 2
            })
        );
        assert!(matches!(
            Sequence::new(Vec::new()),
            Err(ValidationError::InsufficientSample { got: 0, .. })
        ));
    }

    #[test]
    fn test_range_checked_before_length() {
        assert!(matches!(
            Sequence::new(vec![2.0]),
            Err(ValidationError::OutOfRangeInput { .. })
        ));
    }
}
