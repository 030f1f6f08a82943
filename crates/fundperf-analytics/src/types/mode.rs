//! Performance modes and the explicit settings they expand to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which return columns a computation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnBasis {
    /// Price return: `return` and `excess_return`.
    Price,
    /// Dividend-inclusive return: `dividend_return` and `excess_dividend_return`.
    Total,
}

/// Which alpha feeds the information ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaDefinition {
    /// OLS intercept of entity excess return on benchmark excess return.
    RegressionIntercept,
    /// `total_return - beta * benchmark_total_return`.
    Realized,
}

/// Units of return-like output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputUnits {
    /// 0.105 means 10.5%.
    #[default]
    Fraction,
    /// 10.5 means 10.5%.
    Percent,
}

impl OutputUnits {
    /// Multiplier applied to a fractional value.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Fraction => 1.0,
            Self::Percent => 100.0,
        }
    }
}

/// Whether the regression intercept is reported per period or per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaScaling {
    /// Daily intercept as fitted.
    #[default]
    Periodic,
    /// Intercept multiplied by the trading days per year.
    Annualized,
}

impl AlphaScaling {
    /// Multiplier applied to the fitted intercept.
    #[must_use]
    pub fn factor(self, periods_per_year: f64) -> f64 {
        match self {
            Self::Periodic => 1.0,
            Self::Annualized => periods_per_year,
        }
    }
}

/// The three report shapes the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceMode {
    /// Whole-fund aggregate against the dividend-inclusive benchmark.
    TotalFund,
    /// One fund's own returns against the benchmark price return.
    Portfolio,
    /// Per-ticker holdings on a dividend-inclusive basis.
    Holdings,
}

impl PerformanceMode {
    /// Expands the mode into explicit settings.
    #[must_use]
    pub fn settings(self) -> MetricSettings {
        match self {
            Self::TotalFund => MetricSettings {
                entity_basis: ReturnBasis::Price,
                benchmark_basis: ReturnBasis::Total,
                information_alpha: AlphaDefinition::RegressionIntercept,
                require_weight: false,
            },
            Self::Portfolio => MetricSettings {
                entity_basis: ReturnBasis::Price,
                benchmark_basis: ReturnBasis::Price,
                information_alpha: AlphaDefinition::Realized,
                require_weight: false,
            },
            Self::Holdings => MetricSettings {
                entity_basis: ReturnBasis::Total,
                benchmark_basis: ReturnBasis::Total,
                information_alpha: AlphaDefinition::Realized,
                require_weight: true,
            },
        }
    }
}

impl fmt::Display for PerformanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TotalFund => "total_fund",
            Self::Portfolio => "portfolio",
            Self::Holdings => "holdings",
        };
        write!(f, "{name}")
    }
}

/// Column and alpha choices for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSettings {
    /// Entity return columns: compounding, volatility, regression response.
    pub entity_basis: ReturnBasis,
    /// Benchmark return columns: benchmark compounding and regression regressor.
    pub benchmark_basis: ReturnBasis,
    /// Alpha used as the information ratio numerator.
    pub information_alpha: AlphaDefinition,
    /// Whether every row must carry a portfolio weight.
    pub require_weight: bool,
}

impl MetricSettings {
    /// Creates settings from explicit choices, with no weight requirement.
    #[must_use]
    pub fn new(
        entity_basis: ReturnBasis,
        benchmark_basis: ReturnBasis,
        information_alpha: AlphaDefinition,
    ) -> Self {
        Self {
            entity_basis,
            benchmark_basis,
            information_alpha,
            require_weight: false,
        }
    }
}

impl From<PerformanceMode> for MetricSettings {
    fn from(mode: PerformanceMode) -> Self {
        mode.settings()
    }
}
