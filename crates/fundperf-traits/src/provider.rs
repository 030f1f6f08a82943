//! Return series provider trait.
//!
//! A provider answers the four logical queries of the reporting pipeline
//! (benchmark, whole fund, one portfolio, holdings) for a half-open
//! `[start, end)` window, plus the set of currently held tickers.
//!
//! Providers return raw rows; joining with the benchmark and null-filling
//! happen in the analytics layer.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use fundperf_core::{BenchmarkObservation, DateWindow, FundId, ReturnSeries, Ticker};

use crate::error::TraitError;

/// Source of return series for funds, portfolios and holdings.
#[async_trait]
pub trait ReturnSeriesProvider: Send + Sync {
    /// Benchmark rows inside the window, in date order.
    async fn benchmark_series(
        &self,
        window: DateWindow,
    ) -> Result<Vec<BenchmarkObservation>, TraitError>;

    /// Whole-fund aggregate series.
    async fn fund_series(&self, window: DateWindow) -> Result<ReturnSeries, TraitError>;

    /// One fund's own series.
    async fn portfolio_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<ReturnSeries, TraitError>;

    /// One series per ticker the fund held during the window, in ticker order.
    async fn holdings_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<Vec<ReturnSeries>, TraitError>;

    /// Tickers the fund holds now.
    async fn current_tickers(&self, fund: &FundId) -> Result<BTreeSet<Ticker>, TraitError>;
}

#[async_trait]
impl<T: ReturnSeriesProvider + ?Sized> ReturnSeriesProvider for Arc<T> {
    async fn benchmark_series(
        &self,
        window: DateWindow,
    ) -> Result<Vec<BenchmarkObservation>, TraitError> {
        (**self).benchmark_series(window).await
    }

    async fn fund_series(&self, window: DateWindow) -> Result<ReturnSeries, TraitError> {
        (**self).fund_series(window).await
    }

    async fn portfolio_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<ReturnSeries, TraitError> {
        (**self).portfolio_series(fund, window).await
    }

    async fn holdings_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<Vec<ReturnSeries>, TraitError> {
        (**self).holdings_series(fund, window).await
    }

    async fn current_tickers(&self, fund: &FundId) -> Result<BTreeSet<Ticker>, TraitError> {
        (**self).current_tickers(fund).await
    }
}
