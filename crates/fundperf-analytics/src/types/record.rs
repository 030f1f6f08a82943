//! Performance records and batches of them.

use fundperf_core::EntityId;
use serde::{Deserialize, Serialize};

use super::OutputUnits;
use crate::error::AnalyticsError;

/// Summary statistics for one entity over one window.
///
/// Return-like fields (`total_return`, `benchmark_total_return`,
/// `volatility`, `alpha`, `realized_alpha`, `tracking_error`,
/// `expected_return`, `weight`) share `units`. `dividends` is a currency
/// amount; `beta` and the two ratios are unitless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Fund, portfolio or ticker.
    pub entity: EntityId,
    /// Number of observations aggregated.
    pub observations: usize,
    /// Compounded entity return over the window.
    pub total_return: f64,
    /// Compounded benchmark return over the same dates.
    pub benchmark_total_return: f64,
    /// Annualized sample standard deviation of entity returns.
    pub volatility: f64,
    /// Sum of dividends paid.
    pub dividends: f64,
    /// Regression intercept, scaled per configuration.
    pub alpha: f64,
    /// `total_return - beta * benchmark_total_return`.
    pub realized_alpha: f64,
    /// Regression slope.
    pub beta: f64,
    /// Annualized sample standard deviation of residual excess returns.
    pub tracking_error: f64,
    /// Annualized mean excess return.
    pub expected_return: f64,
    /// `expected_return / volatility`.
    pub sharpe_ratio: f64,
    /// Selected alpha over `tracking_error`.
    pub information_ratio: f64,
    /// Last observed portfolio weight (holdings only).
    pub weight: Option<f64>,
    /// Units of the return-like fields.
    pub units: OutputUnits,
}

/// An entity whose record could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFailure {
    /// The entity that failed.
    pub entity: EntityId,
    /// Why it failed.
    pub error: AnalyticsError,
}

impl EntityFailure {
    /// Creates a failure entry.
    #[must_use]
    pub fn new(entity: EntityId, error: AnalyticsError) -> Self {
        Self { entity, error }
    }
}

/// Records for every entity that computed, plus the ones that did not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBatch {
    /// Completed records, sorted by entity.
    pub records: Vec<PerformanceRecord>,
    /// Per-entity failures, sorted by entity.
    pub failures: Vec<EntityFailure>,
}

impl PerformanceBatch {
    /// Builds a batch from per-entity outcomes, sorting both halves by entity.
    #[must_use]
    pub fn from_outcomes(
        outcomes: impl IntoIterator<Item = (EntityId, Result<PerformanceRecord, AnalyticsError>)>,
    ) -> Self {
        let mut batch = Self::default();
        for (entity, outcome) in outcomes {
            match outcome {
                Ok(record) => batch.records.push(record),
                Err(error) => batch.failures.push(EntityFailure::new(entity, error)),
            }
        }
        batch.records.sort_by(|a, b| a.entity.cmp(&b.entity));
        batch.failures.sort_by(|a, b| a.entity.cmp(&b.entity));
        batch
    }

    /// Looks up the record of an entity.
    #[must_use]
    pub fn record(&self, entity: &str) -> Option<&PerformanceRecord> {
        self.records.iter().find(|r| r.entity.as_str() == entity)
    }

    /// Looks up the failure of an entity.
    #[must_use]
    pub fn failure(&self, entity: &str) -> Option<&EntityFailure> {
        self.failures.iter().find(|f| f.entity.as_str() == entity)
    }

    /// Returns true if no entity failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of computed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
