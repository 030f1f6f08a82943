//! Engine error types.

use fundperf_analytics::AnalyticsError;
use fundperf_traits::TraitError;
use thiserror::Error;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Data provider error
    #[error("provider error: {0}")]
    ProviderError(#[from] TraitError),

    /// Calculation error
    #[error("calculation error: {0}")]
    CalculationError(#[from] AnalyticsError),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for EngineError {
    fn from(e: tokio::task::JoinError) -> Self {
        EngineError::Internal(e.to_string())
    }
}
