//! Alpha/beta estimation for one entity.

use fundperf_core::EntityId;
use fundperf_math::regression::{ols, OlsFit};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Fits `excess = alpha + beta * benchmark_excess` with an intercept.
///
/// The intercept is the raw per-period value; scaling happens in the
/// aggregator.
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientData` for fewer than two aligned
/// observations or a constant benchmark excess return.
pub fn estimate_alpha_beta(
    entity: &EntityId,
    benchmark_excess: &[f64],
    excess: &[f64],
) -> AnalyticsResult<OlsFit> {
    ols(benchmark_excess, excess, true)
        .map_err(|e| AnalyticsError::from_math(entity, "regression", &e))
}
