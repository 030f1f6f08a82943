//! Column extraction: the numeric vectors the aggregator reduces.

use fundperf_core::EntityId;

use super::JoinedObservation;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{MetricSettings, ReturnBasis};

/// Per-date columns of one entity, aligned and in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedSeries {
    /// The entity these columns describe.
    pub entity: EntityId,
    /// Entity return per date (per entity basis).
    pub returns: Vec<f64>,
    /// Entity excess return per date (per entity basis).
    pub excess_returns: Vec<f64>,
    /// Benchmark return per date (per benchmark basis).
    pub benchmark_returns: Vec<f64>,
    /// Benchmark excess return per date (per benchmark basis).
    pub benchmark_excess_returns: Vec<f64>,
    /// Entity excess return minus benchmark dividend-inclusive excess return.
    pub residual_returns: Vec<f64>,
    /// Dividends paid per date.
    pub dividends: Vec<f64>,
    /// Weight on the last date that carries one.
    pub last_weight: Option<f64>,
}

impl TransformedSeries {
    /// Extracts every column the settings need.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::MissingData` naming the first column absent
    /// on any row.
    pub fn build(
        entity: &EntityId,
        joined: &[JoinedObservation],
        settings: &MetricSettings,
    ) -> AnalyticsResult<Self> {
        let returns = entity_returns(entity, joined, settings.entity_basis)?;
        let excess_returns = entity_excess_returns(entity, joined, settings.entity_basis)?;
        let dividends = column(entity, joined, "dividends", |j| j.observation.dividends)?;
        let last_weight = if settings.require_weight {
            column(entity, joined, "weight", |j| j.observation.weight)?
                .last()
                .copied()
        } else {
            joined.iter().rev().find_map(|j| j.observation.weight)
        };

        let benchmark_returns: Vec<f64> = joined
            .iter()
            .map(|j| j.benchmark_return(settings.benchmark_basis))
            .collect();
        let benchmark_excess_returns: Vec<f64> = joined
            .iter()
            .map(|j| j.benchmark_excess(settings.benchmark_basis))
            .collect();
        let residual_returns = residuals(&excess_returns, joined);

        Ok(Self {
            entity: entity.clone(),
            returns,
            excess_returns,
            benchmark_returns,
            benchmark_excess_returns,
            residual_returns,
            dividends,
            last_weight,
        })
    }

    /// Number of aligned observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// Residual excess return per date: entity excess return (per basis) minus
/// the benchmark's dividend-inclusive excess return.
pub fn residual_returns(
    entity: &EntityId,
    joined: &[JoinedObservation],
    basis: ReturnBasis,
) -> AnalyticsResult<Vec<f64>> {
    let excess = entity_excess_returns(entity, joined, basis)?;
    Ok(residuals(&excess, joined))
}

fn residuals(excess: &[f64], joined: &[JoinedObservation]) -> Vec<f64> {
    excess
        .iter()
        .zip(joined)
        .map(|(e, j)| e - j.benchmark.excess_dividend_return)
        .collect()
}

pub(crate) fn entity_returns(
    entity: &EntityId,
    joined: &[JoinedObservation],
    basis: ReturnBasis,
) -> AnalyticsResult<Vec<f64>> {
    let name = match basis {
        ReturnBasis::Price => "return",
        ReturnBasis::Total => "dividend_return",
    };
    column(entity, joined, name, |j| j.entity_return(basis))
}

fn entity_excess_returns(
    entity: &EntityId,
    joined: &[JoinedObservation],
    basis: ReturnBasis,
) -> AnalyticsResult<Vec<f64>> {
    let name = match basis {
        ReturnBasis::Price => "excess_return",
        ReturnBasis::Total => "excess_dividend_return",
    };
    column(entity, joined, name, |j| j.entity_excess(basis))
}

fn column(
    entity: &EntityId,
    joined: &[JoinedObservation],
    name: &str,
    get: impl Fn(&JoinedObservation) -> Option<f64>,
) -> AnalyticsResult<Vec<f64>> {
    joined
        .iter()
        .map(|j| get(j).ok_or_else(|| AnalyticsError::missing_data(entity, name)))
        .collect()
}
