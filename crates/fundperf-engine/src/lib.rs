//! # Fundperf Engine
//!
//! Report assembly for fundperf.
//!
//! The engine pulls return series from a [`ReturnSeriesProvider`], runs the
//! analytics pipeline and returns report types that carry their window:
//!
//! - [`FundOverviewReport`]: the whole fund plus one row per sub-fund
//! - [`HoldingsReport`]: one row per currently held ticker
//! - [`CurveReport`]: cumulative entity and benchmark returns for charts
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fundperf_engine::prelude::*;
//! use fundperf_ext_file::CsvReturnProvider;
//!
//! let engine = ReportEngine::builder()
//!     .with_provider(Arc::new(CsvReturnProvider::open("data/")?))
//!     .with_config(AnalyticsConfig::default())
//!     .build()?;
//!
//! let window = DateWindow::parse("2024-04-01", "2025-04-01")?;
//! let overview = engine.fund_overview(&[FundId::new("grad")], window).await?;
//! ```
//!
//! [`ReturnSeriesProvider`]: fundperf_traits::ReturnSeriesProvider

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod engine;
pub mod error;
pub mod report;

pub use builder::ReportEngineBuilder;
pub use engine::ReportEngine;
pub use error::EngineError;
pub use report::{display_name, CurveReport, FundOverviewReport, HoldingsReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::ReportEngineBuilder;
    pub use crate::engine::ReportEngine;
    pub use crate::error::EngineError;
    pub use crate::report::{display_name, CurveReport, FundOverviewReport, HoldingsReport};

    pub use fundperf_analytics::{AnalyticsConfig, OutputUnits, PerformanceRecord};
    pub use fundperf_core::{DateWindow, EntityId, FundId, Ticker};
}
