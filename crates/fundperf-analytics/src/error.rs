//! Error types for performance analytics.
//!
//! Every analytic failure names the entity it belongs to, so grouped
//! computations can report failures per holding.

use fundperf_core::{CoreError, EntityId};
use fundperf_math::MathError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while computing performance metrics.
///
/// Serialized with a `kind` tag so failures in saved reports keep their variant.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyticsError {
    /// A column required by the selected mode is absent from the input.
    #[error("Missing column '{column}' for '{entity}'")]
    MissingData {
        /// The entity whose input is incomplete.
        entity: String,
        /// The absent column.
        column: String,
    },

    /// Too few observations for a statistic or for the regression.
    #[error("Insufficient data for '{entity}': {reason}")]
    InsufficientData {
        /// The entity whose series is too short.
        entity: String,
        /// What could not be computed.
        reason: String,
    },

    /// A ratio whose denominator is zero.
    #[error("Degenerate {metric} for '{entity}': zero denominator")]
    DegenerateMetric {
        /// The entity whose ratio is undefined.
        entity: String,
        /// The ratio that could not be computed.
        metric: String,
    },

    /// Input series violates an ordering or uniqueness invariant.
    #[error("Invalid series: {reason}")]
    InvalidSeries {
        /// Description of the violation.
        reason: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates a missing data error.
    #[must_use]
    pub fn missing_data(entity: &EntityId, column: impl Into<String>) -> Self {
        Self::MissingData {
            entity: entity.to_string(),
            column: column.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(entity: &EntityId, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            entity: entity.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a degenerate metric error.
    #[must_use]
    pub fn degenerate_metric(entity: &EntityId, metric: impl Into<String>) -> Self {
        Self::DegenerateMetric {
            entity: entity.to_string(),
            metric: metric.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Wraps a numerical failure with the entity and statistic it belongs to.
    #[must_use]
    pub fn from_math(entity: &EntityId, what: &str, err: &MathError) -> Self {
        Self::insufficient_data(entity, format!("{what}: {err}"))
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        Self::invalid_series(err.to_string())
    }
}
