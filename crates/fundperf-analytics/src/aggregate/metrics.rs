//! Reduction of a transformed series into a performance record.

use fundperf_core::EntityId;
use fundperf_math::compounding::compound;
use fundperf_math::statistics::{annualize_mean, annualize_std_dev, mean, sample_std_dev};
use fundperf_math::MathResult;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::regression::estimate_alpha_beta;
use crate::transform::TransformedSeries;
use crate::types::{AlphaDefinition, AnalyticsConfig, MetricSettings, PerformanceRecord};

/// Denominators at or below this magnitude make a ratio undefined.
pub const DEGENERATE_TOLERANCE: f64 = 1e-14;

/// Reduces one entity's columns to a performance record.
///
/// Statistics are computed on fractions. Alpha scaling is applied before the
/// ratios, unit scaling after them, so both ratios are unit-invariant.
///
/// # Errors
///
/// - `AnalyticsError::InsufficientData` for an empty series, fewer than two
///   observations, or a constant benchmark excess return
/// - `AnalyticsError::DegenerateMetric` for zero volatility or tracking error
pub fn aggregate(
    series: &TransformedSeries,
    settings: &MetricSettings,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceRecord> {
    let entity = &series.entity;
    let days = config.trading_days_per_year;

    if series.is_empty() {
        return Err(AnalyticsError::insufficient_data(entity, "no observations in window"));
    }

    let total_return = stat(entity, "total_return", compound(&series.returns))?;
    let benchmark_total_return = stat(
        entity,
        "benchmark_total_return",
        compound(&series.benchmark_returns),
    )?;
    let volatility = annualize_std_dev(
        stat(entity, "volatility", sample_std_dev(&series.returns))?,
        days,
    );
    let dividends: f64 = series.dividends.iter().sum();

    let fit = estimate_alpha_beta(
        entity,
        &series.benchmark_excess_returns,
        &series.excess_returns,
    )?;
    let alpha = fit.alpha * config.alpha_scaling.factor(days);
    let realized_alpha = total_return - fit.beta * benchmark_total_return;

    let tracking_error = annualize_std_dev(
        stat(entity, "tracking_error", sample_std_dev(&series.residual_returns))?,
        days,
    );
    let expected_return = annualize_mean(
        stat(entity, "expected_return", mean(&series.excess_returns))?,
        days,
    );

    let sharpe_ratio = ratio(entity, "sharpe_ratio", expected_return, volatility)?;
    let information_alpha = match settings.information_alpha {
        AlphaDefinition::RegressionIntercept => alpha,
        AlphaDefinition::Realized => realized_alpha,
    };
    let information_ratio = ratio(entity, "information_ratio", information_alpha, tracking_error)?;

    let units = config.units.factor();
    Ok(PerformanceRecord {
        entity: entity.clone(),
        observations: series.len(),
        total_return: total_return * units,
        benchmark_total_return: benchmark_total_return * units,
        volatility: volatility * units,
        dividends,
        alpha: alpha * units,
        realized_alpha: realized_alpha * units,
        beta: fit.beta,
        tracking_error: tracking_error * units,
        expected_return: expected_return * units,
        sharpe_ratio,
        information_ratio,
        weight: series.last_weight.map(|w| w * units),
        units: config.units,
    })
}

fn stat(entity: &EntityId, what: &str, value: MathResult<f64>) -> AnalyticsResult<f64> {
    value.map_err(|e| AnalyticsError::from_math(entity, what, &e))
}

fn ratio(
    entity: &EntityId,
    metric: &str,
    numerator: f64,
    denominator: f64,
) -> AnalyticsResult<f64> {
    if denominator.abs() <= DEGENERATE_TOLERANCE {
        return Err(AnalyticsError::degenerate_metric(entity, metric));
    }
    Ok(numerator / denominator)
}
