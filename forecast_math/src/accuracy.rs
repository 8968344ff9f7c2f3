//! Forecast accuracy evaluation
//!
//! Scores each forecast that has an actual observation to compare against
//! and aggregates the percentage errors into a Mean Absolute Percentage Error
//! (MAPE). Two policy knobs decide the numeric edge cases:
//!
//! - [`ZeroActualPolicy`] decides what happens when an actual value is zero
//! - [`MapeAggregation`] decides the MAPE denominator

use crate::moving_averages::ForecastPoint;
use crate::series::Series;
use crate::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Handling of evaluated periods whose actual value is exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroActualPolicy {
    /// Fail the evaluation with [`ForecastError::DivisionByZeroActual`]
    #[default]
    Reject,
    /// Record the slot's percentage error as undefined and keep going
    Undefined,
}

/// Denominator used when averaging percentage errors into a MAPE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapeAggregation {
    /// Divide by the number of defined percentage errors
    #[default]
    EvaluatedPeriods,
    /// Divide by the number of forecast points supplied, extrapolation
    /// included. Matches the legacy console report, which understates MAPE
    /// by one empty slot.
    ReferenceSlots,
}

/// Policies applied by an [`AccuracyEvaluator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationPolicy {
    pub zero_actual: ZeroActualPolicy,
    pub aggregation: MapeAggregation,
}

/// Error of a single evaluated forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPoint {
    /// Period being scored
    pub target_index: usize,
    /// Observed value at `target_index`
    pub actual: f64,
    /// Forecast for `target_index`
    pub predicted: f64,
    /// `|actual - predicted| / actual * 100`, or `None` when the actual is
    /// zero under [`ZeroActualPolicy::Undefined`]
    pub percentage_error: Option<f64>,
}

impl ErrorPoint {
    /// Absolute difference between actual and forecast
    pub fn absolute_error(&self) -> f64 {
        (self.actual - self.predicted).abs()
    }
}

/// Aggregate accuracy over all evaluated periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracySummary {
    /// Mean Absolute Percentage Error, `None` when there is nothing to average
    pub mape: Option<f64>,
    /// Number of periods compared against an actual
    pub evaluated: usize,
    /// Number of evaluated periods with an undefined percentage error
    pub undefined: usize,
    /// Mean Absolute Error over the evaluated periods
    pub mae: Option<f64>,
    /// Root Mean Squared Error over the evaluated periods
    pub rmse: Option<f64>,
}

/// Per-period errors together with their summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub errors: Vec<ErrorPoint>,
    pub summary: AccuracySummary,
}

/// Scores forecasts against a series under a fixed [`EvaluationPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccuracyEvaluator {
    policy: EvaluationPolicy,
}

impl AccuracyEvaluator {
    /// Create an evaluator with the given policy
    pub fn new(policy: EvaluationPolicy) -> Self {
        Self { policy }
    }

    /// Get the evaluator's policy
    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    /// Evaluate `forecasts` against the observations in `series`
    ///
    /// Forecasts whose target lies past the end of the series are skipped.
    pub fn evaluate(&self, series: &Series, forecasts: &[ForecastPoint]) -> Result<Evaluation> {
        let mut errors = Vec::with_capacity(forecasts.len());

        for point in forecasts {
            let Some(actual) = series.get(point.target_index) else {
                tracing::debug!(
                    target_index = point.target_index,
                    "skipping forecast with no actual value"
                );
                continue;
            };

            let percentage_error = if actual == 0.0 {
                match self.policy.zero_actual {
                    ZeroActualPolicy::Reject => {
                        return Err(ForecastError::DivisionByZeroActual {
                            index: point.target_index,
                        });
                    }
                    ZeroActualPolicy::Undefined => {
                        tracing::warn!(
                            target_index = point.target_index,
                            "actual value is zero, percentage error undefined"
                        );
                        None
                    }
                }
            } else {
                Some((actual - point.predicted).abs() / actual * 100.0)
            };

            errors.push(ErrorPoint {
                target_index: point.target_index,
                actual,
                predicted: point.predicted,
                percentage_error,
            });
        }

        let summary = self.summarize(&errors, forecasts.len());
        tracing::debug!(
            evaluated = summary.evaluated,
            undefined = summary.undefined,
            mape = ?summary.mape,
            "evaluated forecasts"
        );

        Ok(Evaluation { errors, summary })
    }

    fn summarize(&self, errors: &[ErrorPoint], slots: usize) -> AccuracySummary {
        let defined: Vec<f64> = errors.iter().filter_map(|e| e.percentage_error).collect();
        let total: f64 = defined.iter().sum();

        let denominator = match self.policy.aggregation {
            MapeAggregation::EvaluatedPeriods => defined.len(),
            MapeAggregation::ReferenceSlots => slots,
        };
        let mape = (denominator > 0).then(|| total / denominator as f64);

        let (mae, rmse) = if errors.is_empty() {
            (None, None)
        } else {
            let n = errors.len() as f64;
            let mae = errors.iter().map(ErrorPoint::absolute_error).sum::<f64>() / n;
            let mse = errors
                .iter()
                .map(|e| e.absolute_error().powi(2))
                .sum::<f64>()
                / n;
            (Some(mae), Some(mse.sqrt()))
        };

        AccuracySummary {
            mape,
            evaluated: errors.len(),
            undefined: errors.len() - defined.len(),
            mae,
            rmse,
        }
    }
}

/// Evaluate `forecasts` with the default policy
///
/// Zero actual values are rejected and MAPE is averaged over the evaluated
/// periods only.
pub fn evaluate(series: &Series, forecasts: &[ForecastPoint]) -> Result<Evaluation> {
    AccuracyEvaluator::default().evaluate(series, forecasts)
}
