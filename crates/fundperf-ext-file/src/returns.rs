//! CSV-backed return series provider.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use fundperf_core::{
    BenchmarkObservation, Date, DateWindow, EntityId, FundId, ReturnObservation, ReturnSeries,
    Ticker,
};
use fundperf_traits::error::TraitError;
use fundperf_traits::provider::ReturnSeriesProvider;

/// Benchmark returns file.
pub const BENCHMARK_FILE: &str = "benchmark.csv";
/// Whole-fund returns file.
pub const FUND_FILE: &str = "fund.csv";
/// Per-fund returns file (with a `fund` column).
pub const PORTFOLIOS_FILE: &str = "portfolios.csv";
/// Holdings returns file (with `fund`, `ticker` and `weight` columns).
pub const HOLDINGS_FILE: &str = "holdings.csv";
/// Currently held tickers (`fund`, `ticker`).
pub const CURRENT_TICKERS_FILE: &str = "current_tickers.csv";

/// Entity id of the whole-fund series.
pub const WHOLE_FUND: &str = "all";

// =============================================================================
// CSV RECORDS
// =============================================================================

/// CSV record for fund, portfolio and holdings rows.
#[derive(Debug, Deserialize)]
struct ReturnRecord {
    caldt: String,
    #[serde(rename = "return")]
    ret: f64,
    div_return: Option<f64>,
    dividends: Option<f64>,
    xs_return: Option<f64>,
    xs_div_return: Option<f64>,
    fund: Option<String>,
    ticker: Option<String>,
    weight: Option<f64>,
}

/// CSV record for benchmark rows. Empty cells read as zero.
#[derive(Debug, Deserialize)]
struct BenchmarkRecord {
    caldt: String,
    #[serde(rename = "return")]
    ret: Option<f64>,
    div_return: Option<f64>,
    xs_return: Option<f64>,
    xs_div_return: Option<f64>,
}

/// CSV record for current holdings.
#[derive(Debug, Deserialize)]
struct CurrentTickerRecord {
    fund: String,
    ticker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SeriesKey {
    WholeFund,
    Portfolio(FundId),
    Holdings(FundId),
}

// =============================================================================
// CSV RETURN PROVIDER
// =============================================================================

/// CSV-based return series provider for tests and offline runs.
///
/// Reads five files from one directory. A missing file is an empty source.
/// Queries return only rows inside the requested window.
pub struct CsvReturnProvider {
    dir: PathBuf,
    benchmark: DashMap<Date, BenchmarkObservation>,
    series: DashMap<SeriesKey, Vec<ReturnObservation>>,
    current: DashMap<FundId, BTreeSet<Ticker>>,
}

impl CsvReturnProvider {
    /// Opens the data directory and loads every file.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, TraitError> {
        let provider = Self {
            dir: dir.as_ref().to_path_buf(),
            benchmark: DashMap::new(),
            series: DashMap::new(),
            current: DashMap::new(),
        };
        provider.reload()?;
        Ok(provider)
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reload all files, replacing previously loaded rows.
    ///
    /// Nothing is replaced unless every file parses.
    pub fn reload(&self) -> Result<(), TraitError> {
        let benchmark: Vec<BenchmarkRecord> = read_records(&self.dir.join(BENCHMARK_FILE))?;
        let fund: Vec<ReturnRecord> = read_records(&self.dir.join(FUND_FILE))?;
        let portfolios: Vec<ReturnRecord> = read_records(&self.dir.join(PORTFOLIOS_FILE))?;
        let holdings: Vec<ReturnRecord> = read_records(&self.dir.join(HOLDINGS_FILE))?;
        let current: Vec<CurrentTickerRecord> =
            read_records(&self.dir.join(CURRENT_TICKERS_FILE))?;

        let mut benchmark_rows = BTreeMap::new();
        for record in benchmark {
            let date = parse_date(&record.caldt)?;
            let obs = BenchmarkObservation::new(
                date,
                record.ret.unwrap_or(0.0),
                record.div_return.unwrap_or(0.0),
                record.xs_return.unwrap_or(0.0),
                record.xs_div_return.unwrap_or(0.0),
            );
            if benchmark_rows.insert(date, obs).is_some() {
                return Err(TraitError::ParseError(format!(
                    "{BENCHMARK_FILE}: duplicate row for {date}"
                )));
            }
        }

        let mut series_rows = Vec::new();
        for record in fund {
            series_rows.push((SeriesKey::WholeFund, to_observation(record)?));
        }
        for record in portfolios {
            let fund = FundId::new(required(PORTFOLIOS_FILE, "fund", record.fund.as_deref())?);
            series_rows.push((SeriesKey::Portfolio(fund), to_observation(record)?));
        }
        for record in holdings {
            let fund = FundId::new(required(HOLDINGS_FILE, "fund", record.fund.as_deref())?);
            required(HOLDINGS_FILE, "ticker", record.ticker.as_deref())?;
            series_rows.push((SeriesKey::Holdings(fund), to_observation(record)?));
        }

        self.benchmark.clear();
        self.series.clear();
        self.current.clear();

        for (date, obs) in benchmark_rows {
            self.benchmark.insert(date, obs);
        }
        for (key, obs) in series_rows {
            self.series.entry(key).or_default().push(obs);
        }
        for record in current {
            self.current
                .entry(FundId::new(record.fund))
                .or_default()
                .insert(Ticker::new(record.ticker));
        }

        Ok(())
    }

    fn rows_in(&self, key: &SeriesKey, window: DateWindow) -> Vec<ReturnObservation> {
        self.series
            .get(key)
            .map(|rows| {
                rows.iter()
                    .filter(|o| window.contains(o.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReturnSeriesProvider for CsvReturnProvider {
    async fn benchmark_series(
        &self,
        window: DateWindow,
    ) -> Result<Vec<BenchmarkObservation>, TraitError> {
        let mut rows: Vec<BenchmarkObservation> = self
            .benchmark
            .iter()
            .filter(|entry| window.contains(*entry.key()))
            .map(|entry| *entry.value())
            .collect();
        rows.sort_by_key(|o| o.date);
        Ok(rows)
    }

    async fn fund_series(&self, window: DateWindow) -> Result<ReturnSeries, TraitError> {
        let rows = self.rows_in(&SeriesKey::WholeFund, window);
        Ok(ReturnSeries::new(EntityId::new(WHOLE_FUND), window, rows)?)
    }

    async fn portfolio_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<ReturnSeries, TraitError> {
        let rows = self.rows_in(&SeriesKey::Portfolio(fund.clone()), window);
        Ok(ReturnSeries::new(fund.clone().into(), window, rows)?)
    }

    async fn holdings_series(
        &self,
        fund: &FundId,
        window: DateWindow,
    ) -> Result<Vec<ReturnSeries>, TraitError> {
        let rows = self.rows_in(&SeriesKey::Holdings(fund.clone()), window);
        Ok(ReturnSeries::group_by_ticker(window, rows)?)
    }

    async fn current_tickers(&self, fund: &FundId) -> Result<BTreeSet<Ticker>, TraitError> {
        Ok(self
            .current
            .get(fund)
            .map(|t| t.clone())
            .unwrap_or_default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TraitError> {
    if !path.exists() {
        return Ok(Vec::new()); // Empty source
    }

    let mut reader =
        csv::Reader::from_path(path).map_err(|e| TraitError::IoError(e.to_string()))?;

    reader
        .deserialize()
        .map(|result| {
            result.map_err(|e| TraitError::ParseError(format!("{}: {e}", path.display())))
        })
        .collect()
}

fn parse_date(caldt: &str) -> Result<Date, TraitError> {
    Date::parse(caldt).map_err(|e| TraitError::ParseError(e.to_string()))
}

fn required<'a>(file: &str, column: &str, value: Option<&'a str>) -> Result<&'a str, TraitError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TraitError::ParseError(format!("{file}: row without '{column}'")))
}

fn to_observation(record: ReturnRecord) -> Result<ReturnObservation, TraitError> {
    Ok(ReturnObservation {
        date: parse_date(&record.caldt)?,
        ret: record.ret,
        dividend_return: record.div_return,
        dividends: record.dividends,
        excess_return: record.xs_return,
        excess_dividend_return: record.xs_div_return,
        ticker: record.ticker.map(Ticker::new),
        weight: record.weight,
    })
}
