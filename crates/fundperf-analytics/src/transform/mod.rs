//! Time-series transforms.
//!
//! Joins entity rows with the benchmark, extracts the columns a mode needs,
//! and builds cumulative and residual return streams. Every transform works
//! on one entity at a time, in ascending date order.

mod columns;
mod curve;
mod join;

pub use columns::{residual_returns, TransformedSeries};
pub use curve::{cumulative_curve, CumulativePoint};
pub use join::{join_benchmark, BenchmarkIndex, JoinedObservation};

use fundperf_core::{DateWindow, ReturnObservation, ReturnSeries};

use crate::error::AnalyticsResult;

/// Partitions holdings rows into one date-ordered series per ticker.
///
/// Series come back in ticker order; compounding never crosses a ticker.
pub fn group_by_entity(
    window: DateWindow,
    rows: impl IntoIterator<Item = ReturnObservation>,
) -> AnalyticsResult<Vec<ReturnSeries>> {
    Ok(ReturnSeries::group_by_ticker(window, rows)?)
}
