//! Run configuration for forecasting and evaluation

use crate::error::{ReportError, Result};
use forecast_math::{EvaluationPolicy, MapeAggregation, WindowSize, ZeroActualPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimal places the report will render
pub const MAX_PRECISION: usize = 17;

/// Forecast run configuration
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// window = 3
/// zero_actual = "undefined"
/// aggregation = "reference-slots"
/// precision = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Number of trailing observations per forecast
    pub window: usize,
    /// What to do with zero actual values
    pub zero_actual: ZeroActualPolicy,
    /// MAPE denominator
    pub aggregation: MapeAggregation,
    /// Decimal places in the rendered table, full precision when unset
    pub precision: Option<usize>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: 4,
            zero_actual: ZeroActualPolicy::default(),
            aggregation: MapeAggregation::default(),
            precision: None,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ForecastConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ReportError::ConfigError(
                "Window size must be positive".to_string(),
            ));
        }

        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(ReportError::ConfigError(format!(
                    "Precision must be at most {} decimal places, got {}",
                    MAX_PRECISION, precision
                )));
            }
        }

        Ok(())
    }

    /// Window size as a validated core type
    pub fn window_size(&self) -> Result<WindowSize> {
        Ok(WindowSize::new(self.window)?)
    }

    /// Evaluation policy for the core evaluator
    pub fn policy(&self) -> EvaluationPolicy {
        EvaluationPolicy {
            zero_actual: self.zero_actual,
            aggregation: self.aggregation,
        }
    }
}
