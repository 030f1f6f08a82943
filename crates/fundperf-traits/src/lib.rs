//! # Fundperf Traits
//!
//! Trait definitions for the data sources behind fundperf reports.
//!
//! This crate contains ONLY trait definitions with no runtime dependencies.
//! Implementations live in extension crates (`fundperf-ext-file` for CSV).
//!
//! ## Dependency Injection
//!
//! The report engine receives its provider explicitly:
//!
//! ```ignore
//! ReportEngineBuilder::new()
//!     .with_provider(Arc::new(CsvReturnProvider::open("data/")?))
//!     .with_config(AnalyticsConfig::default())
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod provider;

pub use error::TraitError;
pub use provider::ReturnSeriesProvider;
