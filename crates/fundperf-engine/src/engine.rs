//! Report engine.

use std::collections::BTreeSet;
use std::sync::Arc;

use fundperf_analytics::{
    compute_curve, compute_fund_performance, compute_holdings_performance, compute_performance,
    AnalyticsConfig, PerformanceInput, PerformanceMode,
};
use fundperf_core::{BenchmarkObservation, DateWindow, FundId, ReturnSeries};
use fundperf_traits::ReturnSeriesProvider;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::builder::ReportEngineBuilder;
use crate::error::EngineError;
use crate::report::{CurveReport, FundOverviewReport, HoldingsReport};

/// Assembles performance reports from a [`ReturnSeriesProvider`].
///
/// Data is fetched asynchronously; metric computation runs inline on the
/// calling task.
pub struct ReportEngine {
    config: AnalyticsConfig,
    provider: Arc<dyn ReturnSeriesProvider>,
}

impl ReportEngine {
    pub(crate) fn new(config: AnalyticsConfig, provider: Arc<dyn ReturnSeriesProvider>) -> Self {
        Self { config, provider }
    }

    /// Starts a builder.
    pub fn builder() -> ReportEngineBuilder {
        ReportEngineBuilder::new()
    }

    /// Analytics configuration in use.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Whole fund plus one row per sub-fund.
    ///
    /// The whole-fund row uses [`PerformanceMode::TotalFund`] and its failure
    /// fails the report; sub-fund rows use [`PerformanceMode::Portfolio`] and
    /// their failures are collected.
    pub async fn fund_overview(
        &self,
        funds: &[FundId],
        window: DateWindow,
    ) -> Result<FundOverviewReport, EngineError> {
        let (benchmark, whole_fund) = tokio::try_join!(
            self.provider.benchmark_series(window),
            self.provider.fund_series(window)
        )?;
        let portfolios = self.portfolio_series(funds, window).await?;

        let overall = compute_fund_performance(
            &whole_fund,
            &benchmark,
            PerformanceMode::TotalFund,
            &self.config,
        )?;
        let batch = compute_performance(
            PerformanceInput::grouped(&portfolios, &benchmark),
            PerformanceMode::Portfolio,
            &self.config,
        )?;

        let mut records = batch.records;
        records.push(overall);
        records.sort_by(|a, b| a.entity.cmp(&b.entity));

        for failure in &batch.failures {
            warn!(fund = %failure.entity, error = %failure.error, "Sub-fund left out of overview");
        }
        info!(
            window = %window,
            funds = records.len() - 1,
            failed = batch.failures.len(),
            "Fund overview computed"
        );

        Ok(FundOverviewReport {
            window,
            records,
            failures: batch.failures,
        })
    }

    /// Per-ticker metrics for the fund's currently held tickers.
    pub async fn holdings_report(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<HoldingsReport, EngineError> {
        let (benchmark, holdings, current) = tokio::try_join!(
            self.provider.benchmark_series(window),
            self.provider.holdings_series(fund, window),
            self.provider.current_tickers(fund)
        )?;

        let batch = compute_holdings_performance(&holdings, &benchmark, &current, &self.config)?;

        info!(
            fund = %fund,
            window = %window,
            tickers = batch.records.len(),
            failed = batch.failures.len(),
            "Holdings report computed"
        );

        Ok(HoldingsReport {
            fund: fund.clone(),
            window,
            records: batch.records,
            failures: batch.failures,
        })
    }

    /// Cumulative return of the whole fund against the benchmark.
    pub async fn fund_curve(&self, window: DateWindow) -> Result<CurveReport, EngineError> {
        let (benchmark, series) = tokio::try_join!(
            self.provider.benchmark_series(window),
            self.provider.fund_series(window)
        )?;
        self.curve(&series, &benchmark)
    }

    /// Cumulative return of one sub-fund against the benchmark.
    pub async fn portfolio_curve(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<CurveReport, EngineError> {
        let (benchmark, series) = tokio::try_join!(
            self.provider.benchmark_series(window),
            self.provider.portfolio_series(fund, window)
        )?;
        self.curve(&series, &benchmark)
    }

    /// Cumulative returns of several sub-funds, sorted by fund.
    pub async fn portfolio_curves(
        &self,
        funds: &[FundId],
        window: DateWindow,
    ) -> Result<Vec<CurveReport>, EngineError> {
        let benchmark = self.provider.benchmark_series(window).await?;
        let mut portfolios = self.portfolio_series(funds, window).await?;
        portfolios.sort_by(|a, b| a.entity().cmp(b.entity()));

        portfolios
            .iter()
            .map(|series| self.curve(series, &benchmark))
            .collect()
    }

    // Entity returns use the price basis and the benchmark its dividend-inclusive
    // return, for the whole fund and sub-funds alike.
    fn curve(
        &self,
        series: &ReturnSeries,
        benchmark: &[BenchmarkObservation],
    ) -> Result<CurveReport, EngineError> {
        let points = compute_curve(series, benchmark, PerformanceMode::TotalFund)?;
        debug!(entity = %series.entity(), points = points.len(), "Curve computed");

        Ok(CurveReport {
            entity: series.entity().clone(),
            window: series.window(),
            points,
        })
    }

    /// Fetches each distinct fund's series concurrently, in completion order.
    async fn portfolio_series(
        &self,
        funds: &[FundId],
        window: DateWindow,
    ) -> Result<Vec<ReturnSeries>, EngineError> {
        let unique: BTreeSet<&FundId> = funds.iter().collect();

        let mut tasks = JoinSet::new();
        for fund in unique {
            let provider = Arc::clone(&self.provider);
            let fund = fund.clone();
            tasks.spawn(async move { provider.portfolio_series(&fund, window).await });
        }

        let mut series = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            series.push(joined??);
        }
        Ok(series)
    }
}
