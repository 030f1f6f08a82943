//! Domain types for return series.

mod date;
mod ids;
mod observation;
mod series;
mod window;

pub use date::Date;
pub use ids::{EntityId, FundId, Ticker};
pub use observation::{BenchmarkObservation, ReturnObservation};
pub use series::ReturnSeries;
pub use window::DateWindow;
