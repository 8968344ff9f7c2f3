//! # Forecast Report
//!
//! Caller-side tooling around [`forecast_math`]: loading a series, reading
//! run configuration and rendering the forecast and its accuracy.
//!
//! ## Features
//!
//! - Series loading from CSV files or inline comma-separated lists
//! - TOML configuration for the window size and evaluation policies
//! - Period-by-period reports as a tab-separated table or JSON
//! - The `fore` command line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_report::{run, DataLoader, ForecastConfig};
//!
//! let series = DataLoader::from_list("1,2,3,4,5,6,7,8,9,10,9,8,7")?;
//! let report = run(&series, &ForecastConfig::default())?;
//!
//! assert_eq!(report.rows().len(), 14);
//! println!("{}", report);
//! # Ok::<(), forecast_report::ReportError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::DataLoader;
pub use crate::error::{ReportError, Result};
pub use crate::report::{Report, ReportRow};

use forecast_math::{AccuracyEvaluator, ForecastEngine, Series};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Forecast and evaluate `series` as configured, returning the report
pub fn run(series: &Series, config: &ForecastConfig) -> Result<Report> {
    config.validate()?;
    let window = config.window_size()?;

    let forecasts = ForecastEngine::new(window).forecast(series);
    let evaluation = AccuracyEvaluator::new(config.policy()).evaluate(series, &forecasts)?;

    tracing::info!(
        len = series.len(),
        window = %window,
        forecasts = forecasts.len(),
        evaluated = evaluation.summary.evaluated,
        "forecast run complete"
    );

    Ok(Report::build(series, window, &forecasts, &evaluation).with_precision(config.precision))
}
