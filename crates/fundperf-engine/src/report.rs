//! Report types.
//!
//! Reports carry the computed records together with the window they cover,
//! so a renderer can title them without going back to the engine.

use fundperf_analytics::transform::CumulativePoint;
use fundperf_analytics::{EntityFailure, PerformanceRecord};
use fundperf_core::{DateWindow, EntityId, FundId};
use serde::{Deserialize, Serialize};

/// Turns a snake_case identifier into a display name.
///
/// `brigham_capital` becomes `Brigham Capital`.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "From {start} to {end}" subtitle shared by every report.
pub fn window_subtitle(window: &DateWindow) -> String {
    format!("From {} to {}", window.start(), window.end())
}

// =============================================================================
// FUND OVERVIEW
// =============================================================================

/// Whole fund plus one row per sub-fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundOverviewReport {
    /// Reporting window.
    pub window: DateWindow,
    /// Rows sorted by entity id; the whole fund is the `all` row.
    pub records: Vec<PerformanceRecord>,
    /// Sub-funds whose metrics could not be computed.
    pub failures: Vec<EntityFailure>,
}

impl FundOverviewReport {
    /// Report title.
    pub fn title(&self) -> String {
        "Overall Fund Performance".to_string()
    }

    /// Report subtitle.
    pub fn subtitle(&self) -> String {
        window_subtitle(&self.window)
    }

    /// Row for one entity.
    pub fn record(&self, entity: &str) -> Option<&PerformanceRecord> {
        self.records.iter().find(|r| r.entity.as_str() == entity)
    }
}

// =============================================================================
// HOLDINGS
// =============================================================================

/// Per-ticker metrics for one fund's current holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsReport {
    /// Fund the holdings belong to.
    pub fund: FundId,
    /// Reporting window.
    pub window: DateWindow,
    /// Rows sorted by ticker.
    pub records: Vec<PerformanceRecord>,
    /// Tickers whose metrics could not be computed.
    pub failures: Vec<EntityFailure>,
}

impl HoldingsReport {
    /// Report title, e.g. `Grad Holdings Performance`.
    pub fn title(&self) -> String {
        format!("{} Holdings Performance", display_name(self.fund.as_str()))
    }

    /// Report subtitle.
    pub fn subtitle(&self) -> String {
        window_subtitle(&self.window)
    }

    /// Row for one ticker.
    pub fn record(&self, ticker: &str) -> Option<&PerformanceRecord> {
        self.records.iter().find(|r| r.entity.as_str() == ticker)
    }

    /// Sum of the latest weights over the reported tickers.
    pub fn total_weight(&self) -> f64 {
        self.records.iter().filter_map(|r| r.weight).sum()
    }
}

// =============================================================================
// CURVES
// =============================================================================

/// Cumulative entity and benchmark returns for charting.
///
/// Points are fractions regardless of the configured output units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveReport {
    /// Entity the curve describes.
    pub entity: EntityId,
    /// Reporting window.
    pub window: DateWindow,
    /// One point per observation date.
    pub points: Vec<CumulativePoint>,
}

impl CurveReport {
    /// Chart title: `Overall Fund Performance` for the whole fund,
    /// `{Fund Name} Performance` otherwise.
    pub fn title(&self, whole_fund: &EntityId) -> String {
        if &self.entity == whole_fund {
            "Overall Fund Performance".to_string()
        } else {
            format!("{} Performance", display_name(self.entity.as_str()))
        }
    }

    /// Chart subtitle.
    pub fn subtitle(&self) -> String {
        window_subtitle(&self.window)
    }

    /// Final compounded entity return, if the curve has points.
    pub fn final_return(&self) -> Option<f64> {
        self.points.last().map(|p| p.entity_return)
    }

    /// Final compounded benchmark return, if the curve has points.
    pub fn final_benchmark_return(&self) -> Option<f64> {
        self.points.last().map(|p| p.benchmark_return)
    }
}
