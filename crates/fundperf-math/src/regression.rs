//! Ordinary least squares.
//!
//! Fits `y = alpha + beta * x + e` by minimizing the sum of squared
//! residuals. No weighting, robustness or regularization is applied.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Population variance below which the regressor is treated as constant.
const VARIANCE_TOLERANCE: f64 = 1e-20;

/// Coefficients of a single-regressor OLS fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OlsFit {
    /// Intercept (zero when fitted without an intercept).
    pub alpha: f64,
    /// Slope.
    pub beta: f64,
}

/// Solves the least-squares problem `design * b ≈ response` through the
/// normal equations `(XᵀX) b = Xᵀy`.
///
/// # Errors
///
/// - `MathError::DimensionMismatch` if the row counts differ
/// - `MathError::InsufficientData` if there are fewer rows than columns
/// - `MathError::SingularMatrix` if `XᵀX` is not positive definite
pub fn least_squares(design: &DMatrix<f64>, response: &DVector<f64>) -> MathResult<DVector<f64>> {
    if design.nrows() != response.len() {
        return Err(MathError::DimensionMismatch {
            left: design.nrows(),
            right: response.len(),
        });
    }
    if design.nrows() < design.ncols() {
        return Err(MathError::insufficient_data(design.ncols(), design.nrows()));
    }

    let xt = design.transpose();
    let xtx = &xt * design;
    let xty = &xt * response;

    let cholesky = xtx.cholesky().ok_or(MathError::SingularMatrix)?;
    Ok(cholesky.solve(&xty))
}

/// Single-regressor OLS of `y` on `x`.
///
/// With `add_intercept` the model is `y = alpha + beta * x`; without it the
/// line is forced through the origin and `alpha` is zero.
///
/// # Errors
///
/// - `MathError::DimensionMismatch` if `x` and `y` differ in length
/// - `MathError::InsufficientData` with fewer than two observations
/// - `MathError::ZeroVariance` if `x` is constant (or all zero without intercept)
///
/// # Example
///
/// ```rust
/// use fundperf_math::regression::ols;
///
/// let x = [0.01, -0.02, 0.015, 0.005];
/// let y: Vec<f64> = x.iter().map(|v| 0.001 + 1.5 * v).collect();
/// let fit = ols(&x, &y, true).unwrap();
/// assert!((fit.beta - 1.5).abs() < 1e-9);
/// assert!((fit.alpha - 0.001).abs() < 1e-9);
/// ```
pub fn ols(x: &[f64], y: &[f64], add_intercept: bool) -> MathResult<OlsFit> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }

    let dispersion = if add_intercept {
        let x_mean = x.iter().sum::<f64>() / n as f64;
        x.iter().map(|v| (v - x_mean).powi(2)).sum::<f64>() / n as f64
    } else {
        x.iter().map(|v| v * v).sum::<f64>() / n as f64
    };
    if dispersion < VARIANCE_TOLERANCE {
        return Err(MathError::ZeroVariance { observations: n });
    }

    let response = DVector::from_column_slice(y);
    if add_intercept {
        let design = DMatrix::from_fn(n, 2, |row, col| if col == 0 { 1.0 } else { x[row] });
        let coefficients = least_squares(&design, &response)?;
        Ok(OlsFit {
            alpha: coefficients[0],
            beta: coefficients[1],
        })
    } else {
        let design = DMatrix::from_column_slice(n, 1, x);
        let coefficients = least_squares(&design, &response)?;
        Ok(OlsFit {
            alpha: 0.0,
            beta: coefficients[0],
        })
    }
}
