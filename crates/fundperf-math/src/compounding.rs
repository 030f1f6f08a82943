//! Geometric compounding of periodic returns.
//!
//! Daily returns are always compounded, never summed: the total return of
//! `r_1..r_n` is `Π(1 + r_i) - 1`.

use crate::error::{MathError, MathResult};

/// Running compounded return: element `t` is `Π_{i<=t}(1 + r_i) - 1`.
///
/// Returns are processed in slice order; an empty input yields an empty output.
///
/// # Example
///
/// ```rust
/// use fundperf_math::compounding::cumulative_returns;
///
/// let cum = cumulative_returns(&[0.10, -0.10]);
/// assert!((cum[1] - (-0.01)).abs() < 1e-12);
/// ```
pub fn cumulative_returns(returns: &[f64]) -> Vec<f64> {
    let mut growth = 1.0;
    returns
        .iter()
        .map(|r| {
            growth *= 1.0 + r;
            growth - 1.0
        })
        .collect()
}

/// Total compounded return of a stream of periodic returns.
///
/// # Errors
///
/// Returns `MathError::InsufficientData` for an empty stream; an empty
/// period has no total return rather than a zero one.
pub fn compound(returns: &[f64]) -> MathResult<f64> {
    cumulative_returns(returns)
        .last()
        .copied()
        .ok_or_else(|| MathError::insufficient_data(1, 0))
}

/// Links two consecutive period returns: `(1 + a)(1 + b) - 1`.
pub fn link(first: f64, second: f64) -> f64 {
    (1.0 + first) * (1.0 + second) - 1.0
}
