//! Half-open date windows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A half-open date window `[start, end)`.
///
/// Every provider query and every return series is scoped to one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: Date,
    end: Date,
}

impl DateWindow {
    /// Creates a new window.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWindow` unless `start < end`.
    pub fn new(start: Date, end: Date) -> CoreResult<Self> {
        if start >= end {
            return Err(CoreError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a window from two ISO 8601 strings.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        Self::new(Date::parse(start)?, Date::parse(end)?)
    }

    /// Inclusive start date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Exclusive end date.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` lies in `[start, end)`.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
