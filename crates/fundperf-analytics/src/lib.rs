//! # Fundperf Analytics
//!
//! Risk/return performance metrics for funds, portfolios and holdings.
//!
//! Turns daily return series into fixed-shape [`PerformanceRecord`]s:
//! compounded total return, annualized volatility, dividends, OLS
//! alpha/beta against a benchmark, tracking error, expected return, Sharpe
//! and information ratios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all calculations are stateless with explicit inputs
//! - **Explicit conventions**: return basis, alpha definition, alpha scaling and
//!   output units are named parameters ([`MetricSettings`], [`AnalyticsConfig`])
//! - **Per-entity failures**: grouped runs collect failures instead of aborting
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Module Overview
//!
//! - [`transform`] - Benchmark join, column extraction, cumulative and residual returns
//! - [`regression`] - Alpha/beta estimation
//! - [`aggregate`] - Reduction to performance records, parallel fan-out
//! - [`pipeline`] - Entry points (`compute_performance` and friends)
//! - [`types`] - Config, modes, records
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large holdings sets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod regression;
pub mod transform;
pub mod types;

pub use error::{AnalyticsError, AnalyticsResult};

pub use pipeline::{
    compute_curve, compute_fund_performance, compute_holdings_performance, compute_performance,
    compute_with_settings, PerformanceInput,
};
pub use types::{
    AlphaDefinition, AlphaScaling, AnalyticsConfig, EntityFailure, MetricSettings, OutputUnits,
    PerformanceBatch, PerformanceMode, PerformanceRecord, ReturnBasis,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pipeline::{
        compute_curve, compute_fund_performance, compute_holdings_performance,
        compute_performance, compute_with_settings, PerformanceInput,
    };
    pub use crate::transform::{CumulativePoint, JoinedObservation};
    pub use crate::types::{
        AlphaDefinition, AlphaScaling, AnalyticsConfig, EntityFailure, MetricSettings,
        OutputUnits, PerformanceBatch, PerformanceMode, PerformanceRecord, ReturnBasis,
    };
}
