//! Immutable storage for an ordered univariate series

use crate::{ForecastError, Result};
use serde::Serialize;

/// A single observation of the series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Zero-based position in the series
    pub index: usize,
    /// Observed value
    pub value: f64,
}

/// An ordered, non-empty sequence of observations
///
/// Indices are implied by position and always contiguous from zero. The
/// series has no mutating methods once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Load a series from its values in temporal order
    ///
    /// Fails with [`ForecastError::InvalidSeries`] when `values` is empty.
    /// No other validation is performed.
    pub fn load(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InvalidSeries);
        }

        tracing::debug!(len = values.len(), "loaded series");
        Ok(Self { values })
    }

    /// Number of observations (always at least one)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A loaded series is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Observed values in order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the observations with their indices
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| Observation { index, value })
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = ForecastError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::load(values)
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = ForecastError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::load(values.to_vec())
    }
}
