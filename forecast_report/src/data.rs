//! Series loading from CSV files and inline value lists

use crate::error::{ReportError, Result};
use forecast_math::Series;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Series used by the legacy console report when no data is supplied
pub const DEMO_VALUES: [f64; 13] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0, 7.0,
];

/// Data loader for univariate series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a series from the first column of a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Series> {
        let file = File::open(path.as_ref())?;
        let series = Self::from_reader(file)?;

        tracing::debug!(
            path = %path.as_ref().display(),
            len = series.len(),
            "loaded series from CSV"
        );
        Ok(series)
    }

    /// Load a series from CSV data
    ///
    /// Values are read from the first column. A first row whose value is not
    /// numeric is treated as a header; any later non-numeric value is an
    /// error. Blank lines are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Series> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut values = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let Some(field) = record.get(0) else {
                continue;
            };

            match field.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) if row == 0 => {
                    tracing::debug!(header = field, "skipping CSV header row");
                }
                Err(_) => {
                    return Err(ReportError::DataError(format!(
                        "Invalid value {:?} on row {}",
                        field,
                        row + 1
                    )));
                }
            }
        }

        Ok(Series::load(values)?)
    }

    /// Parse a comma-separated list of values such as `"1, 2.5, 3"`
    pub fn from_list(input: &str) -> Result<Series> {
        let values = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    ReportError::DataError(format!("Invalid value {:?} in list", token))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Series::load(values)?)
    }

    /// The built-in demonstration series
    pub fn demo() -> Result<Series> {
        Ok(Series::load(DEMO_VALUES.to_vec())?)
    }
}
