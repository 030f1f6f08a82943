//! # Fundperf Math
//!
//! Numerical utilities behind the fundperf performance pipeline.
//!
//! - **Compounding**: running products of `(1 + r)` and geometric linking
//! - **Statistics**: mean, sample standard deviation, annualization
//! - **Regression**: ordinary least squares with an optional intercept
//!
//! All functions operate on plain `f64` slices and fail loudly (with a
//! [`MathError`]) instead of returning NaN when a statistic is undefined.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]

pub mod compounding;
pub mod error;
pub mod regression;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::{compound, cumulative_returns, link};
    pub use crate::error::{MathError, MathResult};
    pub use crate::regression::{least_squares, ols, OlsFit};
    pub use crate::statistics::{annualize_mean, annualize_std_dev, mean, sample_std_dev};
}

pub use error::{MathError, MathResult};
