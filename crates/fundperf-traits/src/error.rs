//! Error types for provider operations.

use fundperf_core::CoreError;
use thiserror::Error;

/// Common error type for provider operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Requested fund or table not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// Rows could not be assembled into a valid series
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}

impl From<CoreError> for TraitError {
    fn from(e: CoreError) -> Self {
        TraitError::InvalidSeries(e.to_string())
    }
}
