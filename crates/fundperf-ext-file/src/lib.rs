//! # Fundperf Ext File
//!
//! File-based return series for fundperf reports.
//!
//! Provides [`CsvReturnProvider`], a CSV implementation of
//! [`ReturnSeriesProvider`](fundperf_traits::ReturnSeriesProvider) for tests
//! and offline runs. Each table is one file in a data directory:
//!
//! | file | columns |
//! |---|---|
//! | `benchmark.csv` | `caldt, return, div_return, xs_return, xs_div_return` |
//! | `fund.csv` | `caldt, return, div_return, dividends, xs_return, xs_div_return` |
//! | `portfolios.csv` | as `fund.csv`, plus `fund` |
//! | `holdings.csv` | as `fund.csv`, plus `fund`, `ticker`, `weight` |
//! | `current_tickers.csv` | `fund, ticker` |
//!
//! Production deployments implement the trait over their own database.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod returns;

pub use returns::*;
