//! Left join of entity observations with benchmark observations.

use std::collections::BTreeMap;

use fundperf_core::{BenchmarkObservation, Date, ReturnObservation, ReturnSeries};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::ReturnBasis;

/// Benchmark rows keyed by date.
///
/// Lookups for a date the benchmark does not cover return a zero row, so a
/// missing benchmark day contributes zero return and zero excess return.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkIndex {
    rows: BTreeMap<Date, BenchmarkObservation>,
}

impl BenchmarkIndex {
    /// Indexes benchmark rows by date.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidSeries` if two rows share a date.
    pub fn new(observations: &[BenchmarkObservation]) -> AnalyticsResult<Self> {
        let mut rows = BTreeMap::new();
        for obs in observations {
            if rows.insert(obs.date, *obs).is_some() {
                return Err(AnalyticsError::invalid_series(format!(
                    "duplicate benchmark observation on {}",
                    obs.date
                )));
            }
        }
        Ok(Self { rows })
    }

    /// The benchmark row for a date, zero-filled when absent.
    #[must_use]
    pub fn get(&self, date: Date) -> BenchmarkObservation {
        self.rows
            .get(&date)
            .copied()
            .unwrap_or_else(|| BenchmarkObservation::zero(date))
    }

    /// Returns true if the benchmark has a row for the date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.rows.contains_key(&date)
    }

    /// Number of benchmark rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no benchmark rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// An entity observation paired with the benchmark row of the same date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedObservation {
    /// The entity row.
    pub observation: ReturnObservation,
    /// The benchmark row (zeros if the benchmark had none).
    pub benchmark: BenchmarkObservation,
}

impl JoinedObservation {
    /// Entity return for the basis, if present.
    #[must_use]
    pub fn entity_return(&self, basis: ReturnBasis) -> Option<f64> {
        match basis {
            ReturnBasis::Price => Some(self.observation.ret),
            ReturnBasis::Total => self.observation.dividend_return,
        }
    }

    /// Entity excess return for the basis, if present.
    #[must_use]
    pub fn entity_excess(&self, basis: ReturnBasis) -> Option<f64> {
        match basis {
            ReturnBasis::Price => self.observation.excess_return,
            ReturnBasis::Total => self.observation.excess_dividend_return,
        }
    }

    /// Benchmark return for the basis.
    #[must_use]
    pub fn benchmark_return(&self, basis: ReturnBasis) -> f64 {
        match basis {
            ReturnBasis::Price => self.benchmark.ret,
            ReturnBasis::Total => self.benchmark.dividend_return,
        }
    }

    /// Benchmark excess return for the basis.
    #[must_use]
    pub fn benchmark_excess(&self, basis: ReturnBasis) -> f64 {
        match basis {
            ReturnBasis::Price => self.benchmark.excess_return,
            ReturnBasis::Total => self.benchmark.excess_dividend_return,
        }
    }
}

/// Left-joins a series with the benchmark on date.
///
/// Every entity row is kept, in date order.
#[must_use]
pub fn join_benchmark(series: &ReturnSeries, benchmark: &BenchmarkIndex) -> Vec<JoinedObservation> {
    series
        .observations()
        .iter()
        .map(|obs| JoinedObservation {
            observation: obs.clone(),
            benchmark: benchmark.get(obs.date),
        })
        .collect()
}
