//! Trailing simple moving-average forecasts
//!
//! The mean of each full window of `p` observations is used as the forecast
//! for the period immediately after that window. The last window of the
//! series produces one extrapolated forecast past the end of the data.

use crate::series::Series;
use crate::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing observations averaged into one forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(usize);

impl WindowSize {
    /// Create a window size, rejecting zero
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidWindow(period));
        }

        Ok(Self(period))
    }

    /// Get the window length
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = ForecastError;

    fn try_from(period: usize) -> Result<Self> {
        Self::new(period)
    }
}

impl From<WindowSize> for usize {
    fn from(window: WindowSize) -> Self {
        window.0
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A forecast for a single target period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Period being predicted
    pub target_index: usize,
    /// Mean of the `p` observations immediately before `target_index`
    pub predicted: f64,
}

impl ForecastPoint {
    /// Whether this point lies past the last observation of `series`
    pub fn is_extrapolation(&self, series: &Series) -> bool {
        self.target_index >= series.len()
    }
}

/// Computes trailing moving-average forecasts for a fixed window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastEngine {
    window: WindowSize,
}

impl ForecastEngine {
    /// Create an engine for the given window
    pub fn new(window: WindowSize) -> Self {
        Self { window }
    }

    /// Create an engine from a raw window length
    pub fn with_period(period: usize) -> Result<Self> {
        Ok(Self::new(WindowSize::new(period)?))
    }

    /// Get the window size
    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Forecast every period that has a full window of history behind it
    ///
    /// Returns `len - p + 1` points targeting `p ..= len`, or nothing when the
    /// series is shorter than the window. The final point targets `len` and
    /// has no actual to compare against.
    pub fn forecast(&self, series: &Series) -> Vec<ForecastPoint> {
        let p = self.window.get();
        let values = series.values();

        if values.len() < p {
            tracing::debug!(
                len = values.len(),
                window = p,
                "series shorter than window, nothing to forecast"
            );
            return Vec::new();
        }

        let forecasts: Vec<ForecastPoint> = values
            .windows(p)
            .enumerate()
            .map(|(start, window)| ForecastPoint {
                target_index: start + p,
                predicted: window.iter().sum::<f64>() / p as f64,
            })
            .collect();

        tracing::debug!(
            len = values.len(),
            window = p,
            points = forecasts.len(),
            "computed moving-average forecasts"
        );
        forecasts
    }
}

/// Forecast `series` with a trailing mean of `window` observations
pub fn forecast(series: &Series, window: WindowSize) -> Vec<ForecastPoint> {
    ForecastEngine::new(window).forecast(series)
}
