//! Configuration, mode and output types for the analytics pipeline.

mod config;
mod mode;
mod record;

pub use config::{AnalyticsConfig, TRADING_DAYS_PER_YEAR};
pub use mode::{
    AlphaDefinition, AlphaScaling, MetricSettings, OutputUnits, PerformanceMode, ReturnBasis,
};
pub use record::{EntityFailure, PerformanceBatch, PerformanceRecord};
