//! Date-ordered return series for a single entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DateWindow, EntityId, ReturnObservation, Ticker};
use crate::error::{CoreError, CoreResult};

/// Return observations for one entity over one window.
///
/// Invariants enforced at construction:
/// - observations are sorted ascending by date
/// - each date appears at most once
/// - every date lies inside the window
///
/// Gaps (non-trading days) are kept as gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    entity: EntityId,
    window: DateWindow,
    observations: Vec<ReturnObservation>,
}

impl ReturnSeries {
    /// Creates a series, sorting the observations by date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateDate` or `CoreError::OutsideWindow`.
    pub fn new(
        entity: EntityId,
        window: DateWindow,
        mut observations: Vec<ReturnObservation>,
    ) -> CoreResult<Self> {
        if let Some(outside) = observations.iter().find(|o| !window.contains(o.date)) {
            return Err(CoreError::OutsideWindow {
                entity: entity.to_string(),
                date: outside.date.to_string(),
                window: window.to_string(),
            });
        }

        observations.sort_by_key(|o| o.date);
        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(CoreError::duplicate_date(entity.as_str(), pair[1].date));
        }

        Ok(Self {
            entity,
            window,
            observations,
        })
    }

    /// Partitions holdings rows by ticker into one series per ticker.
    ///
    /// Series are returned in ticker order; each is date-ordered on its own,
    /// so nothing computed per series ever crosses a ticker boundary.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` for a row without a ticker, or any
    /// error raised by [`ReturnSeries::new`] for an individual ticker.
    pub fn group_by_ticker(
        window: DateWindow,
        rows: impl IntoIterator<Item = ReturnObservation>,
    ) -> CoreResult<Vec<Self>> {
        let mut groups: BTreeMap<Ticker, Vec<ReturnObservation>> = BTreeMap::new();
        for row in rows {
            let ticker = row.ticker.clone().ok_or_else(|| CoreError::MissingField {
                field: "ticker".to_string(),
                date: row.date.to_string(),
            })?;
            groups.entry(ticker).or_default().push(row);
        }

        groups
            .into_iter()
            .map(|(ticker, rows)| Self::new(ticker.into(), window, rows))
            .collect()
    }

    /// Creates an empty series.
    pub fn empty(entity: EntityId, window: DateWindow) -> Self {
        Self {
            entity,
            window,
            observations: Vec::new(),
        }
    }

    /// The entity this series describes.
    pub fn entity(&self) -> &EntityId {
        &self.entity
    }

    /// The series window.
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Observations in ascending date order.
    pub fn observations(&self) -> &[ReturnObservation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Consumes the series, returning its observations.
    pub fn into_observations(self) -> Vec<ReturnObservation> {
        self.observations
    }
}
