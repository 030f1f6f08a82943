//! # Fundperf Core
//!
//! Core types shared by every fundperf crate.
//!
//! - **Dates**: `Date` and the half-open `DateWindow` used by every query
//! - **Identifiers**: `EntityId`, `FundId`, `Ticker`
//! - **Observations**: per-date fund/holding rows and benchmark rows
//! - **Series**: `ReturnSeries`, a date-ordered, duplicate-free set of observations
//!
//! ## Example
//!
//! ```rust
//! use fundperf_core::prelude::*;
//!
//! let window = DateWindow::parse("2024-04-01", "2025-04-01").unwrap();
//! let obs = ReturnObservation::new(Date::parse("2024-04-02").unwrap(), 0.01);
//! let series = ReturnSeries::new(EntityId::new("all"), window, vec![obs]).unwrap();
//! assert_eq!(series.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BenchmarkObservation, Date, DateWindow, EntityId, FundId, ReturnObservation, ReturnSeries,
        Ticker,
    };
}

pub use error::{CoreError, CoreResult};
pub use types::{
    BenchmarkObservation, Date, DateWindow, EntityId, FundId, ReturnObservation, ReturnSeries,
    Ticker,
};
