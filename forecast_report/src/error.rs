//! Error types for the forecast_report crate

use forecast_math::ForecastError;
use thiserror::Error;

/// Custom error types for the forecast_report crate
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error raised by the forecasting core
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    /// Error related to reading or parsing series data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to configuration validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from TOML parsing or serialization
    #[error("TOML error: {0}")]
    TomlError(String),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ReportError>;

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvError(err.to_string())
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::TomlError(err.to_string())
    }
}

impl From<toml::ser::Error> for ReportError {
    fn from(err: toml::ser::Error) -> Self {
        ReportError::TomlError(err.to_string())
    }
}
