//! Error types for core fundperf types.
//!
//! These errors are raised while constructing dates, windows and series,
//! before any analytics run.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A window whose start is not strictly before its end.
    #[error("Invalid window: start {start} must be before end {end}")]
    InvalidWindow {
        /// Window start (inclusive).
        start: String,
        /// Window end (exclusive).
        end: String,
    },

    /// Two observations for the same entity share a date.
    #[error("Duplicate observation for '{entity}' on {date}")]
    DuplicateDate {
        /// The entity whose series is invalid.
        entity: String,
        /// The repeated date.
        date: String,
    },

    /// An observation falls outside the series window.
    #[error("Observation for '{entity}' on {date} is outside window {window}")]
    OutsideWindow {
        /// The entity whose series is invalid.
        entity: String,
        /// The offending date.
        date: String,
        /// The series window.
        window: String,
    },

    /// A row lacks a field needed to place it (e.g. the ticker of a holding row).
    #[error("Observation on {date} is missing '{field}'")]
    MissingField {
        /// The absent field.
        field: String,
        /// Date of the offending row.
        date: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a duplicate date error.
    #[must_use]
    pub fn duplicate_date(entity: impl Into<String>, date: impl ToString) -> Self {
        Self::DuplicateDate {
            entity: entity.into(),
            date: date.to_string(),
        }
    }
}
