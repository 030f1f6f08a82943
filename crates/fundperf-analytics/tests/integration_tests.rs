//! Integration tests for fundperf-analytics.
//!
//! These tests run the full pipeline (join, transform, regression,
//! aggregation) on small but realistic fund and holdings series.

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use fundperf_analytics::prelude::*;
use fundperf_core::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn window() -> DateWindow {
    DateWindow::parse("2025-01-01", "2025-02-01").unwrap()
}

fn date(day: u32) -> Date {
    Date::from_ymd(2025, 1, day).unwrap()
}

/// Three trading days where the fund's excess return equals the benchmark's
/// excess price return exactly (alpha 0, beta 1 by construction).
fn three_day_fund() -> (ReturnSeries, Vec<BenchmarkObservation>) {
    let returns = [0.01, -0.005, 0.02];
    let excess = [0.008, -0.004, 0.018];
    let days = [2, 3, 6];

    let obs = days
        .iter()
        .zip(returns.iter().zip(excess))
        .map(|(&d, (&r, x))| {
            ReturnObservation::new(date(d), r)
                .with_dividend_return(r)
                .with_dividends(0.0)
                .with_excess_return(x)
                .with_excess_dividend_return(x)
        })
        .collect();
    let series = ReturnSeries::new(EntityId::new("grad"), window(), obs).unwrap();

    let benchmark = vec![
        BenchmarkObservation::new(date(2), 0.009, 0.0095, 0.008, 0.0085),
        BenchmarkObservation::new(date(3), -0.003, -0.0028, -0.004, -0.0038),
        BenchmarkObservation::new(date(6), 0.019, 0.0193, 0.018, 0.0183),
    ];
    (series, benchmark)
}

fn holding(ticker: &str, returns: &[f64], weight: f64) -> Vec<ReturnObservation> {
    returns
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            ReturnObservation::new(date(2 + i as u32), r)
                .with_dividend_return(r + 0.0002)
                .with_dividends(0.01)
                .with_excess_return(r - 0.0001)
                .with_excess_dividend_return(r + 0.0001)
                .with_ticker(ticker)
                .with_weight(weight)
        })
        .collect()
}

fn holdings_benchmark() -> Vec<BenchmarkObservation> {
    [0.004, -0.006, 0.011, 0.002, -0.001]
        .iter()
        .enumerate()
        .map(|(i, &r)| BenchmarkObservation::new(date(2 + i as u32), r, r, r - 0.0001, r + 0.0001))
        .collect()
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn three_day_fund_end_to_end() {
    let (series, benchmark) = three_day_fund();
    let record = compute_fund_performance(
        &series,
        &benchmark,
        PerformanceMode::Portfolio,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();

    assert_relative_eq!(record.total_return, 1.01 * 0.995 * 1.02 - 1.0, epsilon = 1e-12);
    assert_relative_eq!(record.total_return, 0.025049, epsilon = 1e-6);
    assert_relative_eq!(record.beta, 1.0, epsilon = 1e-9);
    assert_relative_eq!(record.alpha, 0.0, epsilon = 1e-10);
    assert_eq!(record.observations, 3);
    assert!(record.volatility > 0.0);
    assert!(record.tracking_error > 0.0);
}

#[test]
fn total_return_compounds_not_sums() {
    let (series, benchmark) = three_day_fund();
    let record = compute_fund_performance(
        &series,
        &benchmark,
        PerformanceMode::TotalFund,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();

    let summed: f64 = [0.01, -0.005, 0.02].iter().sum();
    assert!((record.total_return - summed).abs() > 1e-5);
}

#[test]
fn missing_benchmark_days_contribute_zero() {
    let (series, mut benchmark) = three_day_fund();
    benchmark.remove(1);

    let curve = compute_curve(&series, &benchmark, PerformanceMode::TotalFund).unwrap();
    assert_eq!(curve.len(), 3);
    assert_relative_eq!(curve[1].benchmark_return, curve[0].benchmark_return, epsilon = 1e-15);
    assert_relative_eq!(
        curve[2].benchmark_return,
        1.0095 * 1.0193 - 1.0,
        epsilon = 1e-12
    );

    let record = compute_fund_performance(
        &series,
        &benchmark,
        PerformanceMode::TotalFund,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();
    assert_eq!(record.observations, 3);
}

#[test]
fn percent_output_scales_returns_only() {
    let (series, benchmark) = three_day_fund();
    let fraction = compute_fund_performance(
        &series,
        &benchmark,
        PerformanceMode::Portfolio,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();
    let percent = compute_fund_performance(
        &series,
        &benchmark,
        PerformanceMode::Portfolio,
        &AnalyticsConfig::sequential().with_units(OutputUnits::Percent),
    )
    .unwrap();

    assert_relative_eq!(percent.total_return, 100.0 * fraction.total_return, epsilon = 1e-10);
    assert_relative_eq!(percent.tracking_error, 100.0 * fraction.tracking_error, epsilon = 1e-10);
    assert_relative_eq!(percent.expected_return, 100.0 * fraction.expected_return, epsilon = 1e-10);
    assert_eq!(percent.sharpe_ratio, fraction.sharpe_ratio);
    assert_eq!(percent.information_ratio, fraction.information_ratio);
}

#[test]
fn annualized_alpha_scales_by_trading_days() {
    let (series, benchmark) = three_day_fund();
    let settings = MetricSettings::new(
        ReturnBasis::Price,
        ReturnBasis::Total,
        AlphaDefinition::RegressionIntercept,
    );
    let periodic =
        compute_with_settings(&series, &benchmark, &settings, &AnalyticsConfig::sequential())
            .unwrap();
    let annual = compute_with_settings(
        &series,
        &benchmark,
        &settings,
        &AnalyticsConfig::sequential().with_alpha_scaling(AlphaScaling::Annualized),
    )
    .unwrap();

    assert_relative_eq!(annual.alpha, 252.0 * periodic.alpha, epsilon = 1e-12);
    assert_eq!(annual.beta, periodic.beta);
    assert_relative_eq!(
        annual.information_ratio,
        252.0 * periodic.information_ratio,
        epsilon = 1e-9
    );
}

#[test]
fn single_entity_failures_propagate() {
    let series = ReturnSeries::new(
        EntityId::new("all"),
        window(),
        vec![ReturnObservation::new(date(2), 0.01)
            .with_dividends(0.0)
            .with_excess_return(0.009)],
    )
    .unwrap();
    let err = compute_fund_performance(
        &series,
        &[],
        PerformanceMode::TotalFund,
        &AnalyticsConfig::sequential(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticsError::InsufficientData { .. }));

    let empty = ReturnSeries::empty(EntityId::new("all"), window());
    let err = compute_fund_performance(
        &empty,
        &[],
        PerformanceMode::TotalFund,
        &AnalyticsConfig::sequential(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticsError::InsufficientData { .. }));
}

// =============================================================================
// HOLDINGS
// =============================================================================

#[test]
fn holdings_report_for_current_tickers() {
    let mut rows = holding("MSFT", &[0.012, -0.004, 0.009, 0.003, -0.002], 0.06);
    rows.extend(holding("AAPL", &[0.008, -0.010, 0.015, 0.001, 0.004], 0.05));
    rows.extend(holding("SOLD", &[0.020, 0.010, -0.030, 0.002, 0.001], 0.00));
    rows.extend(holding("TSLA", &[0.030], 0.02));
    let holdings = fundperf_analytics::transform::group_by_entity(window(), rows).unwrap();

    let current: BTreeSet<Ticker> = ["MSFT", "AAPL", "TSLA", "NVDA"]
        .into_iter()
        .map(Ticker::new)
        .collect();

    let batch = compute_holdings_performance(
        &holdings,
        &holdings_benchmark(),
        &current,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();

    let tickers: Vec<&str> = batch.records.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT"]);
    assert!(batch.record("SOLD").is_none());
    assert!(batch.failure("NVDA").is_none());

    let tsla = batch.failure("TSLA").unwrap();
    assert!(matches!(tsla.error, AnalyticsError::InsufficientData { .. }));

    let aapl = batch.record("AAPL").unwrap();
    assert_eq!(aapl.weight, Some(0.05));
    assert_relative_eq!(aapl.dividends, 0.05, epsilon = 1e-12);
    let expected: f64 = [0.0082, -0.0098, 0.0152, 0.0012, 0.0042]
        .iter()
        .map(|r| 1.0 + r)
        .product::<f64>()
        - 1.0;
    assert_relative_eq!(aapl.total_return, expected, epsilon = 1e-12);
}

#[test]
fn constant_return_holding_is_reported_as_failure() {
    let mut rows = holding("MSFT", &[0.012, -0.004, 0.009, 0.003], 0.06);
    rows.extend(holding("CASH", &[0.0002, 0.0002, 0.0002, 0.0002], 0.03));
    let holdings = fundperf_analytics::transform::group_by_entity(window(), rows).unwrap();
    let current: BTreeSet<Ticker> = ["CASH", "MSFT"].into_iter().map(Ticker::new).collect();

    let batch = compute_holdings_performance(
        &holdings,
        &holdings_benchmark(),
        &current,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();

    assert!(batch.record("MSFT").is_some());
    assert!(batch.record("CASH").is_none());
    assert_eq!(
        batch.failure("CASH").unwrap().error,
        AnalyticsError::DegenerateMetric {
            entity: "CASH".to_string(),
            metric: "sharpe_ratio".to_string(),
        }
    );
}

#[test]
fn holdings_without_weight_fail_per_entity() {
    let mut rows = holding("MSFT", &[0.012, -0.004, 0.009], 0.06);
    let mut bare = holding("AAPL", &[0.008, -0.010, 0.015], 0.05);
    bare[2].weight = None;
    rows.extend(bare);
    let holdings = fundperf_analytics::transform::group_by_entity(window(), rows).unwrap();

    let batch = compute_performance(
        PerformanceInput::grouped(&holdings, &holdings_benchmark()),
        PerformanceMode::Holdings,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();

    assert_eq!(batch.len(), 1);
    assert_eq!(
        batch.failure("AAPL").unwrap().error,
        AnalyticsError::MissingData {
            entity: "AAPL".to_string(),
            column: "weight".to_string(),
        }
    );
}

#[test]
fn parallel_and_sequential_agree() {
    let mut rows = Vec::new();
    let tickers: Vec<String> = (0..40).map(|i| format!("T{i:02}")).collect();
    for (i, ticker) in tickers.iter().enumerate() {
        let shift = i as f64 * 0.0003;
        rows.extend(holding(
            ticker,
            &[0.01 + shift, -0.004, 0.006 - shift, 0.002 * shift, -0.003],
            0.025,
        ));
    }
    let holdings = fundperf_analytics::transform::group_by_entity(window(), rows).unwrap();
    let current: BTreeSet<Ticker> = tickers.iter().map(|t| Ticker::new(t.as_str())).collect();
    let benchmark = holdings_benchmark();

    let sequential = compute_holdings_performance(
        &holdings,
        &benchmark,
        &current,
        &AnalyticsConfig::sequential(),
    )
    .unwrap();
    let parallel = compute_holdings_performance(
        &holdings,
        &benchmark,
        &current,
        &AnalyticsConfig::new().with_threshold(2),
    )
    .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len() + sequential.failures.len(), 40);
}
