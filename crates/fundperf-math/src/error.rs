//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// The regressor has no variance, so the slope is undefined.
    #[error("Regressor has zero variance over {observations} observations")]
    ZeroVariance {
        /// Number of observations in the fit.
        observations: usize,
    },

    /// Input sequences have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Normal equations are not positive definite.
    #[error("Singular matrix: cannot solve normal equations")]
    SingularMatrix,
}

impl MathError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2, got 1"));

        let err = MathError::ZeroVariance { observations: 5 };
        assert!(err.to_string().contains("zero variance"));
    }
}
