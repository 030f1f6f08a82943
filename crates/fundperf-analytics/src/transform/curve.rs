//! Cumulative return curves (the data behind fund and portfolio charts).

use fundperf_core::{Date, EntityId};
use fundperf_math::compounding::cumulative_returns;
use serde::{Deserialize, Serialize};

use super::columns::entity_returns;
use super::JoinedObservation;
use crate::error::AnalyticsResult;
use crate::types::MetricSettings;

/// Compounded entity and benchmark return as of one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// Observation date.
    pub date: Date,
    /// Entity return compounded from the first date through this one.
    pub entity_return: f64,
    /// Benchmark return compounded over the same dates.
    pub benchmark_return: f64,
}

/// Builds the running compounded return of entity and benchmark.
///
/// Returns are fractions; an empty input gives an empty curve.
pub fn cumulative_curve(
    entity: &EntityId,
    joined: &[JoinedObservation],
    settings: &MetricSettings,
) -> AnalyticsResult<Vec<CumulativePoint>> {
    let entity_curve = cumulative_returns(&entity_returns(entity, joined, settings.entity_basis)?);
    let benchmark: Vec<f64> = joined
        .iter()
        .map(|j| j.benchmark_return(settings.benchmark_basis))
        .collect();
    let benchmark_curve = cumulative_returns(&benchmark);

    Ok(joined
        .iter()
        .zip(entity_curve.into_iter().zip(benchmark_curve))
        .map(|(j, (entity_return, benchmark_return))| CumulativePoint {
            date: j.observation.date,
            entity_return,
            benchmark_return,
        })
        .collect())
}
