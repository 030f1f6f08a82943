//! Configuration for performance analytics computation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AlphaScaling, OutputUnits};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Trading days used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Configuration for performance analytics computation.
///
/// Controls annualization, output units, alpha scaling and parallelism.
/// Can be loaded from TOML:
///
/// ```toml
/// trading_days_per_year = 252.0
/// units = "percent"
/// alpha_scaling = "annualized"
/// parallel = true
/// parallel_threshold = 50
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Periods per year used for volatility, tracking error and expected return.
    pub trading_days_per_year: f64,

    /// Units of return-like output fields.
    pub units: OutputUnits,

    /// Whether the regression intercept is reported per period or annualized.
    pub alpha_scaling: AlphaScaling,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum entity count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            units: OutputUnits::Fraction,
            alpha_scaling: AlphaScaling::Periodic,
            parallel: true,
            parallel_threshold: 100,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Parses a config from TOML text. Absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> AnalyticsResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AnalyticsError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AnalyticsError::InvalidConfig {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks that the annualization factor is usable.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.trading_days_per_year.is_finite() || self.trading_days_per_year <= 0.0 {
            return Err(AnalyticsError::InvalidConfig {
                reason: format!(
                    "trading_days_per_year must be positive, got {}",
                    self.trading_days_per_year
                ),
            });
        }
        Ok(())
    }

    /// Sets the number of trading days per year.
    #[must_use]
    pub fn with_trading_days(mut self, days: f64) -> Self {
        self.trading_days_per_year = days;
        self
    }

    /// Sets the output units.
    #[must_use]
    pub fn with_units(mut self, units: OutputUnits) -> Self {
        self.units = units;
        self
    }

    /// Sets the alpha scaling.
    #[must_use]
    pub fn with_alpha_scaling(mut self, scaling: AlphaScaling) -> Self {
        self.alpha_scaling = scaling;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
