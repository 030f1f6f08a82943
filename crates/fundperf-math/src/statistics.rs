//! Sample moments and annualization.
//!
//! Standard deviations use the sample (n - 1) estimator throughout.

use crate::error::{MathError, MathResult};

/// Arithmetic mean.
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for an empty slice.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (Bessel-corrected, n - 1 denominator).
///
/// # Errors
///
/// Returns `MathError::InsufficientData` with fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    let n = values.len();
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok((ss / (n - 1) as f64).sqrt())
}

/// Scales a periodic standard deviation to an annual one: `σ × √periods`.
pub fn annualize_std_dev(std_dev: f64, periods_per_year: f64) -> f64 {
    std_dev * periods_per_year.sqrt()
}

/// Scales a periodic mean to an annual one: `μ × periods` (simple, not compounded).
pub fn annualize_mean(periodic_mean: f64, periods_per_year: f64) -> f64 {
    periodic_mean * periods_per_year
}
