//! Metric aggregation.
//!
//! - [`aggregate`]: one transformed series to one performance record
//! - [`maybe_parallel_map`]: per-entity fan-out for grouped computations

mod metrics;
pub mod parallel;

pub use metrics::{aggregate, DEGENERATE_TOLERANCE};
pub use parallel::maybe_parallel_map;
