//! Per-date return rows.

use serde::{Deserialize, Serialize};

use super::{Date, Ticker};

/// One fund, portfolio or holding return row.
///
/// Returns are fractional (0.01 = 1%). Only `date` and `ret` are mandatory;
/// the analytics layer reports a missing column when a mode needs a field
/// that is absent on any row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnObservation {
    /// Calendar date of the observation.
    pub date: Date,
    /// Simple single-period (price) return.
    #[serde(rename = "return")]
    pub ret: f64,
    /// Single-period return including dividends.
    pub dividend_return: Option<f64>,
    /// Dividends paid in the period (currency amount).
    pub dividends: Option<f64>,
    /// Price return minus the cash proxy.
    pub excess_return: Option<f64>,
    /// Dividend-inclusive return minus the cash proxy.
    pub excess_dividend_return: Option<f64>,
    /// Holding ticker (holdings tables only).
    pub ticker: Option<Ticker>,
    /// Portfolio weight at period end (holdings tables only).
    pub weight: Option<f64>,
}

impl ReturnObservation {
    /// Creates an observation carrying only a date and a price return.
    #[must_use]
    pub fn new(date: Date, ret: f64) -> Self {
        Self {
            date,
            ret,
            dividend_return: None,
            dividends: None,
            excess_return: None,
            excess_dividend_return: None,
            ticker: None,
            weight: None,
        }
    }

    /// Sets the dividend-inclusive return.
    #[must_use]
    pub fn with_dividend_return(mut self, value: f64) -> Self {
        self.dividend_return = Some(value);
        self
    }

    /// Sets the dividends amount.
    #[must_use]
    pub fn with_dividends(mut self, value: f64) -> Self {
        self.dividends = Some(value);
        self
    }

    /// Sets the excess price return.
    #[must_use]
    pub fn with_excess_return(mut self, value: f64) -> Self {
        self.excess_return = Some(value);
        self
    }

    /// Sets the excess dividend-inclusive return.
    #[must_use]
    pub fn with_excess_dividend_return(mut self, value: f64) -> Self {
        self.excess_dividend_return = Some(value);
        self
    }

    /// Sets the holding ticker.
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<Ticker>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the end-of-period weight.
    #[must_use]
    pub fn with_weight(mut self, value: f64) -> Self {
        self.weight = Some(value);
        self
    }
}

/// One benchmark return row.
///
/// After a left join onto a fund series, dates without a benchmark row are
/// represented by [`BenchmarkObservation::zero`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkObservation {
    /// Calendar date of the observation.
    pub date: Date,
    /// Benchmark price return.
    #[serde(rename = "return")]
    pub ret: f64,
    /// Benchmark dividend-inclusive return.
    pub dividend_return: f64,
    /// Benchmark excess price return.
    pub excess_return: f64,
    /// Benchmark excess dividend-inclusive return.
    pub excess_dividend_return: f64,
}

impl BenchmarkObservation {
    /// Creates a benchmark observation.
    #[must_use]
    pub fn new(
        date: Date,
        ret: f64,
        dividend_return: f64,
        excess_return: f64,
        excess_dividend_return: f64,
    ) -> Self {
        Self {
            date,
            ret,
            dividend_return,
            excess_return,
            excess_dividend_return,
        }
    }

    /// A null-filled benchmark row for a date the benchmark does not cover.
    #[must_use]
    pub fn zero(date: Date) -> Self {
        Self::new(date, 0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let date = Date::from_ymd(2025, 1, 2).unwrap();
        let obs = ReturnObservation::new(date, 0.01)
            .with_dividend_return(0.012)
            .with_dividends(3.5)
            .with_excess_return(0.009)
            .with_excess_dividend_return(0.011)
            .with_ticker("AAPL")
            .with_weight(0.05);

        assert_eq!(obs.dividend_return, Some(0.012));
        assert_eq!(obs.ticker.as_ref().map(Ticker::as_str), Some("AAPL"));
        assert_eq!(obs.weight, Some(0.05));
    }

    #[test]
    fn test_zero_benchmark() {
        let date = Date::from_ymd(2025, 1, 2).unwrap();
        let bmk = BenchmarkObservation::zero(date);
        assert_eq!(bmk.ret, 0.0);
        assert_eq!(bmk.excess_dividend_return, 0.0);
    }

    #[test]
    fn test_serde_uses_return_column_name() {
        let date = Date::from_ymd(2025, 1, 2).unwrap();
        let json = serde_json::to_value(ReturnObservation::new(date, 0.01)).unwrap();
        assert_eq!(json["return"], 0.01);
    }
}
