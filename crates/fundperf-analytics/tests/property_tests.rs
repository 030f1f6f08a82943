//! Property-based tests for pipeline invariants.
//!
//! - Total return is the compounded product, and survives re-partitioning
//! - Volatility and tracking error are non-negative
//! - Ratios do not depend on output units
//! - Input order does not matter once a series is built
//! - Grouped runs emit one outcome per current ticker with data

use std::collections::BTreeSet;

use fundperf_analytics::prelude::*;
use fundperf_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn start() -> Date {
    Date::from_ymd(2024, 4, 1).unwrap()
}

fn window() -> DateWindow {
    DateWindow::parse("2024-04-01", "2025-04-01").unwrap()
}

/// Rows of (return, excess return, benchmark excess return).
fn daily_rows(max_len: usize) -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((-0.05f64..0.05, -0.05f64..0.05, -0.05f64..0.05), 3..max_len)
}

fn build(entity: &str, rows: &[(f64, f64, f64)]) -> (ReturnSeries, Vec<BenchmarkObservation>) {
    let mut obs = Vec::with_capacity(rows.len());
    let mut benchmark = Vec::with_capacity(rows.len());
    for (i, &(ret, excess, bmk)) in rows.iter().enumerate() {
        let date = start().add_days(i as i64);
        obs.push(
            ReturnObservation::new(date, ret)
                .with_dividend_return(ret)
                .with_dividends(0.0)
                .with_excess_return(excess)
                .with_excess_dividend_return(excess)
                .with_ticker(entity)
                .with_weight(0.01),
        );
        benchmark.push(BenchmarkObservation::new(date, bmk, bmk, bmk, bmk * 0.5));
    }
    let series = ReturnSeries::new(EntityId::new(entity), window(), obs).unwrap();
    (series, benchmark)
}

proptest! {
    #[test]
    fn total_return_is_product(rows in daily_rows(60)) {
        let (series, benchmark) = build("all", &rows);
        let curve = compute_curve(&series, &benchmark, PerformanceMode::TotalFund).unwrap();
        let expected = rows.iter().fold(1.0, |acc, r| acc * (1.0 + r.0)) - 1.0;
        prop_assert!((curve[curve.len() - 1].entity_return - expected).abs() < 1e-12);
    }

    #[test]
    fn split_series_links_to_whole(rows in daily_rows(60), split in 1usize..59) {
        let split = split.min(rows.len() - 1);
        let (whole, benchmark) = build("all", &rows);
        let (head, _) = build("all", &rows[..split]);
        let tail_obs: Vec<ReturnObservation> = whole.observations()[split..].to_vec();
        let tail = ReturnSeries::new(EntityId::new("all"), window(), tail_obs).unwrap();

        let last = |s: &ReturnSeries| {
            let curve = compute_curve(s, &benchmark, PerformanceMode::Portfolio).unwrap();
            curve[curve.len() - 1].entity_return
        };
        let linked = (1.0 + last(&head)) * (1.0 + last(&tail)) - 1.0;
        prop_assert!((last(&whole) - linked).abs() < 1e-10);
    }

    #[test]
    fn risk_metrics_non_negative(rows in daily_rows(40)) {
        let (series, benchmark) = build("all", &rows);
        let outcome = compute_fund_performance(
            &series,
            &benchmark,
            PerformanceMode::TotalFund,
            &AnalyticsConfig::sequential(),
        );
        if let Ok(record) = outcome {
            prop_assert!(record.volatility >= 0.0);
            prop_assert!(record.tracking_error >= 0.0);
        }
    }

    #[test]
    fn ratios_are_unit_invariant(rows in daily_rows(40)) {
        let (series, benchmark) = build("all", &rows);
        let compute = |units| compute_fund_performance(
            &series,
            &benchmark,
            PerformanceMode::Portfolio,
            &AnalyticsConfig::sequential().with_units(units),
        );
        if let (Ok(fraction), Ok(percent)) =
            (compute(OutputUnits::Fraction), compute(OutputUnits::Percent))
        {
            prop_assert_eq!(fraction.sharpe_ratio, percent.sharpe_ratio);
            prop_assert_eq!(fraction.information_ratio, percent.information_ratio);
            prop_assert!((percent.volatility - 100.0 * fraction.volatility).abs() < 1e-9);
        }
    }

    #[test]
    fn input_order_is_irrelevant(rows in daily_rows(40), rotate in 0usize..40) {
        let (series, benchmark) = build("all", &rows);
        let mut shuffled = series.observations().to_vec();
        let rotate = rotate % shuffled.len();
        shuffled.rotate_left(rotate);
        let reordered = ReturnSeries::new(EntityId::new("all"), window(), shuffled).unwrap();

        let config = AnalyticsConfig::sequential();
        let mode = PerformanceMode::TotalFund;
        let a = compute_fund_performance(&series, &benchmark, mode, &config);
        let b = compute_fund_performance(&reordered, &benchmark, mode, &config);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn one_outcome_per_current_ticker(
        held in prop::collection::btree_set("[A-E]", 1..5),
        current in prop::collection::btree_set("[A-H]", 0..8),
        rows in daily_rows(20),
    ) {
        let holdings: Vec<ReturnSeries> = held.iter().map(|t| build(t, &rows).0).collect();
        let (_, benchmark) = build("bmk", &rows);
        let current_tickers: BTreeSet<Ticker> =
            current.iter().map(|t| Ticker::new(t.as_str())).collect();

        let batch = compute_holdings_performance(
            &holdings,
            &benchmark,
            &current_tickers,
            &AnalyticsConfig::sequential(),
        )
        .unwrap();

        let mut seen: Vec<String> = batch
            .records
            .iter()
            .map(|r| r.entity.to_string())
            .chain(batch.failures.iter().map(|f| f.entity.to_string()))
            .collect();
        seen.sort();
        let expected: Vec<String> = held.intersection(&current).cloned().collect();
        prop_assert_eq!(seen, expected);
    }
}
