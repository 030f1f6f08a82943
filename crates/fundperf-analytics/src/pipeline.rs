//! Entry points of the performance pipeline.
//!
//! Each entity runs join → column extraction → regression → aggregation on
//! its own. Single-entity callers get the failure back; grouped callers get
//! a [`PerformanceBatch`] with failures collected per entity.

use std::collections::BTreeSet;

use fundperf_core::{BenchmarkObservation, ReturnSeries, Ticker};
use tracing::{debug, warn};

use crate::aggregate::{aggregate, maybe_parallel_map};
use crate::error::AnalyticsResult;
use crate::transform::{
    cumulative_curve, join_benchmark, BenchmarkIndex, CumulativePoint, TransformedSeries,
};
use crate::types::{
    AnalyticsConfig, MetricSettings, PerformanceBatch, PerformanceMode, PerformanceRecord,
};

/// Input to [`compute_performance`]: one series or many, with their benchmark.
#[derive(Debug, Clone, Copy)]
pub enum PerformanceInput<'a> {
    /// A single fund or portfolio.
    Single {
        /// The entity series.
        series: &'a ReturnSeries,
        /// Benchmark rows covering the same window.
        benchmark: &'a [BenchmarkObservation],
    },
    /// One series per holding.
    Grouped {
        /// One series per entity.
        series: &'a [ReturnSeries],
        /// Benchmark rows covering the same window.
        benchmark: &'a [BenchmarkObservation],
    },
}

impl<'a> PerformanceInput<'a> {
    /// A single-entity input.
    #[must_use]
    pub fn single(series: &'a ReturnSeries, benchmark: &'a [BenchmarkObservation]) -> Self {
        Self::Single { series, benchmark }
    }

    /// A grouped input.
    #[must_use]
    pub fn grouped(series: &'a [ReturnSeries], benchmark: &'a [BenchmarkObservation]) -> Self {
        Self::Grouped { series, benchmark }
    }
}

/// Computes records for every entity of the input in the given mode.
///
/// Entity failures are collected in the batch; the call itself only fails
/// when the benchmark rows are unusable.
///
/// # Example
///
/// ```rust
/// use fundperf_analytics::prelude::*;
/// use fundperf_core::prelude::*;
///
/// let window = DateWindow::parse("2025-01-01", "2025-02-01").unwrap();
/// let rows = [(2, 0.01, 0.008), (3, -0.005, -0.004), (6, 0.02, 0.018)];
/// let obs = rows
///     .iter()
///     .map(|&(d, r, x)| {
///         ReturnObservation::new(Date::from_ymd(2025, 1, d).unwrap(), r)
///             .with_dividends(0.0)
///             .with_excess_return(x)
///     })
///     .collect();
/// let series = ReturnSeries::new(EntityId::new("grad"), window, obs).unwrap();
/// let benchmark: Vec<_> = [(2, 0.007), (3, -0.003), (6, 0.019)]
///     .iter()
///     .map(|&(d, x)| BenchmarkObservation::new(Date::from_ymd(2025, 1, d).unwrap(), x, x, x, x))
///     .collect();
///
/// let batch = compute_performance(
///     PerformanceInput::single(&series, &benchmark),
///     PerformanceMode::Portfolio,
///     &AnalyticsConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(batch.len(), 1);
/// ```
pub fn compute_performance(
    input: PerformanceInput<'_>,
    mode: PerformanceMode,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceBatch> {
    let settings = mode.settings();
    match input {
        PerformanceInput::Single { series, benchmark } => {
            let index = BenchmarkIndex::new(benchmark)?;
            let outcome = compute_indexed(series, &index, &settings, config);
            Ok(PerformanceBatch::from_outcomes([(series.entity().clone(), outcome)]))
        }
        PerformanceInput::Grouped { series, benchmark } => {
            let index = BenchmarkIndex::new(benchmark)?;
            Ok(compute_grouped(series, &index, &settings, config))
        }
    }
}

/// Computes the whole-fund record, propagating any failure.
pub fn compute_fund_performance(
    series: &ReturnSeries,
    benchmark: &[BenchmarkObservation],
    mode: PerformanceMode,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceRecord> {
    compute_with_settings(series, benchmark, &mode.settings(), config)
}

/// Computes one record with explicitly chosen settings.
pub fn compute_with_settings(
    series: &ReturnSeries,
    benchmark: &[BenchmarkObservation],
    settings: &MetricSettings,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceRecord> {
    let index = BenchmarkIndex::new(benchmark)?;
    compute_indexed(series, &index, settings, config)
}

/// Computes holdings records for the currently held tickers.
///
/// Series whose ticker is not in `current_tickers` are skipped; a current
/// ticker with no series produces nothing.
pub fn compute_holdings_performance(
    holdings: &[ReturnSeries],
    benchmark: &[BenchmarkObservation],
    current_tickers: &BTreeSet<Ticker>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceBatch> {
    let index = BenchmarkIndex::new(benchmark)?;
    let held: Vec<ReturnSeries> = holdings
        .iter()
        .filter(|s| current_tickers.contains(&Ticker::new(s.entity().as_str())))
        .cloned()
        .collect();

    debug!(
        held = held.len(),
        skipped = holdings.len() - held.len(),
        "Filtered holdings to current tickers"
    );

    Ok(compute_grouped(
        &held,
        &index,
        &PerformanceMode::Holdings.settings(),
        config,
    ))
}

/// Cumulative entity and benchmark return per date for one series.
pub fn compute_curve(
    series: &ReturnSeries,
    benchmark: &[BenchmarkObservation],
    mode: PerformanceMode,
) -> AnalyticsResult<Vec<CumulativePoint>> {
    let index = BenchmarkIndex::new(benchmark)?;
    let joined = join_benchmark(series, &index);
    cumulative_curve(series.entity(), &joined, &mode.settings())
}

fn compute_grouped(
    series: &[ReturnSeries],
    index: &BenchmarkIndex,
    settings: &MetricSettings,
    config: &AnalyticsConfig,
) -> PerformanceBatch {
    let outcomes = maybe_parallel_map(series, config, |s| {
        (s.entity().clone(), compute_indexed(s, index, settings, config))
    });
    PerformanceBatch::from_outcomes(outcomes)
}

fn compute_indexed(
    series: &ReturnSeries,
    index: &BenchmarkIndex,
    settings: &MetricSettings,
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceRecord> {
    let joined = join_benchmark(series, index);
    let outcome = TransformedSeries::build(series.entity(), &joined, settings)
        .and_then(|transformed| aggregate(&transformed, settings, config));

    match &outcome {
        Ok(record) => debug!(
            entity = %record.entity,
            observations = record.observations,
            total_return = record.total_return,
            "Computed performance record"
        ),
        Err(e) => warn!(entity = %series.entity(), error = %e, "Performance computation failed"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use approx::assert_relative_eq;
    use fundperf_core::{Date, DateWindow, EntityId, ReturnObservation};

    fn window() -> DateWindow {
        DateWindow::parse("2025-01-01", "2025-02-01").unwrap()
    }

    fn date(day: u32) -> Date {
        Date::from_ymd(2025, 1, day).unwrap()
    }

    fn benchmark() -> Vec<BenchmarkObservation> {
        vec![
            BenchmarkObservation::new(date(2), 0.009, 0.0095, 0.008, 0.0085),
            BenchmarkObservation::new(date(3), -0.003, -0.0028, -0.004, -0.0038),
            BenchmarkObservation::new(date(6), 0.019, 0.0193, 0.018, 0.0183),
        ]
    }

    fn fund(entity: &str, returns: [f64; 3]) -> ReturnSeries {
        let days = [2, 3, 6];
        let obs = returns
            .iter()
            .zip(days)
            .map(|(&r, d)| {
                ReturnObservation::new(date(d), r)
                    .with_dividend_return(r + 0.0005)
                    .with_dividends(0.1)
                    .with_excess_return(r - 0.002)
                    .with_excess_dividend_return(r - 0.0015)
            })
            .collect();
        ReturnSeries::new(EntityId::new(entity), window(), obs).unwrap()
    }

    fn holding(ticker: &str, returns: [f64; 3]) -> ReturnSeries {
        let obs = fund(ticker, returns)
            .into_observations()
            .into_iter()
            .map(|o| o.with_ticker(ticker).with_weight(0.1))
            .collect();
        ReturnSeries::new(EntityId::new(ticker), window(), obs).unwrap()
    }

    #[test]
    fn test_fund_performance() {
        let record = compute_fund_performance(
            &fund("all", [0.01, -0.005, 0.02]),
            &benchmark(),
            PerformanceMode::TotalFund,
            &AnalyticsConfig::sequential(),
        )
        .unwrap();

        assert_eq!(record.entity.as_str(), "all");
        assert_relative_eq!(record.total_return, 1.01 * 0.995 * 1.02 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            record.benchmark_total_return,
            1.0095 * 0.9972 * 1.0193 - 1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(record.dividends, 0.3, epsilon = 1e-12);
        assert_eq!(record.weight, None);
    }

    #[test]
    fn test_single_input_collects_failure() {
        let mut obs = fund("all", [0.01, -0.005, 0.02]).into_observations();
        obs[1].excess_return = None;
        let series = ReturnSeries::new(EntityId::new("all"), window(), obs).unwrap();
        let bmk = benchmark();

        let batch = compute_performance(
            PerformanceInput::single(&series, &bmk),
            PerformanceMode::Portfolio,
            &AnalyticsConfig::sequential(),
        )
        .unwrap();
        assert!(batch.is_empty());
        assert_eq!(
            batch.failures[0].error,
            AnalyticsError::missing_data(&EntityId::new("all"), "excess_return")
        );
    }

    #[test]
    fn test_grouped_input() {
        let holdings = vec![
            holding("MSFT", [0.01, -0.005, 0.02]),
            holding("AAPL", [0.012, -0.002, 0.015]),
        ];
        let bmk = benchmark();
        let batch = compute_performance(
            PerformanceInput::grouped(&holdings, &bmk),
            PerformanceMode::Holdings,
            &AnalyticsConfig::sequential(),
        )
        .unwrap();

        assert!(batch.is_complete());
        let tickers: Vec<&str> = batch.records.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(batch.records[0].weight, Some(0.1));
    }

    #[test]
    fn test_holdings_filtered_to_current() {
        let holdings = vec![
            holding("MSFT", [0.01, -0.005, 0.02]),
            holding("AAPL", [0.012, -0.002, 0.015]),
            holding("TSLA", [0.03, -0.02, 0.01]),
        ];
        let current: BTreeSet<Ticker> =
            ["AAPL", "TSLA", "NVDA"].into_iter().map(Ticker::new).collect();

        let batch = compute_holdings_performance(
            &holdings,
            &benchmark(),
            &current,
            &AnalyticsConfig::sequential(),
        )
        .unwrap();

        let tickers: Vec<&str> = batch.records.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "TSLA"]);
        assert!(batch.failures.is_empty());
    }

    #[test]
    fn test_duplicate_benchmark_rejected() {
        let mut bmk = benchmark();
        bmk.push(bmk[0]);
        let err = compute_fund_performance(
            &fund("all", [0.01, -0.005, 0.02]),
            &bmk,
            PerformanceMode::TotalFund,
            &AnalyticsConfig::sequential(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidSeries { .. }));
    }

    #[test]
    fn test_curve() {
        let curve = compute_curve(
            &fund("all", [0.01, -0.005, 0.02]),
            &benchmark(),
            PerformanceMode::Portfolio,
        )
        .unwrap();
        assert_eq!(curve.len(), 3);
        assert_relative_eq!(
            curve[2].benchmark_return,
            1.009 * 0.997 * 1.019 - 1.0,
            epsilon = 1e-12
        );
    }
}
