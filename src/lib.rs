//! # Fore
//!
//! Workspace facade for trailing moving-average forecasting. The computation
//! lives in [`forecast_math`]; loading, configuration and rendering live in
//! [`forecast_report`].
//!
//! ## Example
//!
//! ```
//! use fore_workspace::math::{evaluate, forecast, Series, WindowSize};
//!
//! let series = Series::load(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let forecasts = forecast(&series, WindowSize::new(4).unwrap());
//! let evaluation = evaluate(&series, &forecasts).unwrap();
//!
//! assert_eq!(forecasts[0].predicted, 2.5);
//! assert_eq!(evaluation.summary.mape, Some(50.0));
//! ```

pub use forecast_math as math;
pub use forecast_report as report;

pub use forecast_math::{ForecastError, Series, WindowSize};
pub use forecast_report::{run, ForecastConfig, Report, ReportError};
