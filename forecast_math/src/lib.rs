//! # Forecast Math
//!
//! Trailing moving-average forecasting over a univariate series and
//! percentage-error evaluation of those forecasts.
//!
//! The crate exposes three pure operations:
//!
//! - [`Series::load`] builds an immutable, non-empty series
//! - [`forecast`] produces one trailing-mean forecast per full window
//! - [`evaluate`] scores the in-range forecasts and aggregates a MAPE
//!
//! ```
//! use forecast_math::{evaluate, forecast, Series, WindowSize};
//!
//! let series = Series::load(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let window = WindowSize::new(4).unwrap();
//!
//! let forecasts = forecast(&series, window);
//! assert_eq!(forecasts.len(), 3);
//! assert_eq!(forecasts[0].predicted, 2.5);
//!
//! let evaluation = evaluate(&series, &forecasts).unwrap();
//! assert_eq!(evaluation.errors.len(), 2);
//! ```

use thiserror::Error;

pub mod accuracy;
pub mod moving_averages;
pub mod series;

pub use crate::accuracy::{
    evaluate, AccuracyEvaluator, AccuracySummary, ErrorPoint, Evaluation, EvaluationPolicy,
    MapeAggregation, ZeroActualPolicy,
};
pub use crate::moving_averages::{forecast, ForecastEngine, ForecastPoint, WindowSize};
pub use crate::series::{Observation, Series};

/// Errors that can occur while loading, forecasting or evaluating a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Invalid series: input sequence is empty")]
    InvalidSeries,

    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindow(usize),

    #[error("Division by zero: actual value at index {index} is zero")]
    DivisionByZeroActual { index: usize },
}

/// Result type for forecast math operations
pub type Result<T> = std::result::Result<T, ForecastError>;
