//! Tabular and JSON rendering of forecast results

use crate::error::Result;
use forecast_math::{AccuracySummary, Evaluation, ForecastPoint, Series, WindowSize};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One period of the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    /// Zero-based period index
    pub period: usize,
    /// Observed value, absent for the extrapolated period
    pub actual: Option<f64>,
    /// Forecast, absent for periods without a full window behind them
    pub forecast: Option<f64>,
    /// Whether the period was scored against its actual value
    pub evaluated: bool,
    /// Percentage error, absent when not evaluated or undefined
    pub error: Option<f64>,
}

/// Forecast results laid out period by period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    window: usize,
    rows: Vec<ReportRow>,
    summary: AccuracySummary,
    #[serde(skip)]
    precision: Option<usize>,
}

impl Report {
    /// Assemble a report from a series and its forecasts and evaluation
    pub fn build(
        series: &Series,
        window: WindowSize,
        forecasts: &[ForecastPoint],
        evaluation: &Evaluation,
    ) -> Self {
        let predicted: BTreeMap<usize, f64> = forecasts
            .iter()
            .map(|f| (f.target_index, f.predicted))
            .collect();
        let errors: BTreeMap<usize, Option<f64>> = evaluation
            .errors
            .iter()
            .map(|e| (e.target_index, e.percentage_error))
            .collect();

        let mut rows: Vec<ReportRow> = series
            .observations()
            .map(|obs| ReportRow {
                period: obs.index,
                actual: Some(obs.value),
                forecast: predicted.get(&obs.index).copied(),
                evaluated: errors.contains_key(&obs.index),
                error: errors.get(&obs.index).copied().flatten(),
            })
            .collect();

        rows.extend(
            predicted
                .range(series.len()..)
                .map(|(&period, &forecast)| ReportRow {
                    period,
                    actual: None,
                    forecast: Some(forecast),
                    evaluated: false,
                    error: None,
                }),
        );

        Self {
            window: window.get(),
            rows,
            summary: evaluation.summary,
            precision: None,
        }
    }

    /// Round values to `decimals` places when rendering the table
    pub fn with_precision(mut self, decimals: Option<usize>) -> Self {
        self.precision = decimals;
        self
    }

    /// Window size the forecasts were computed with
    pub fn window(&self) -> usize {
        self.window
    }

    /// Rows in period order
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Accuracy summary
    pub fn summary(&self) -> &AccuracySummary {
        &self.summary
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn value(&self, value: f64) -> String {
        match self.precision {
            Some(decimals) => format!("{:.*}", decimals, value),
            None => value.to_string(),
        }
    }

    fn cell(&self, value: Option<f64>) -> String {
        value.map(|v| self.value(v)).unwrap_or_default()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "period\tdata\tforecast\terror")?;

        for row in &self.rows {
            let mut cells = vec![
                row.period.to_string(),
                self.cell(row.actual),
                self.cell(row.forecast),
            ];
            if row.evaluated {
                cells.push(match row.error {
                    Some(error) => self.value(error),
                    None => "undefined".to_string(),
                });
            }

            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            writeln!(f, "{}", cells.join("\t"))?;
        }

        writeln!(f)?;
        match self.summary.mape {
            Some(mape) => write!(f, "mape = {}", self.value(mape)),
            None => write!(f, "mape = undefined"),
        }
    }
}
