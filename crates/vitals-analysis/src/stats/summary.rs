//! Descriptive summary of a whole series.

use serde::{Deserialize, Serialize};

use vitals_core::errors::{AnalysisResult, TrendError};

use super::descriptive;

/// Aggregate descriptive statistics over a chronological series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation; 0.0 for a single value.
    pub std_dev: f64,
    /// Percent change from the first to the last value; 0.0 when the first value is 0.
    pub percent_change: f64,
    pub first_value: f64,
    pub last_value: f64,
}

/// Summarize a chronologically ordered series. Requires at least one value.
pub fn summarize(values: &[f64]) -> AnalysisResult<TrendSummary> {
    let (min, max) = descriptive::min_max(values).ok_or_else(|| TrendError::insufficient(1, 0))?;
    let mean = descriptive::mean(values)?;
    let std_dev = if values.len() > 1 {
        descriptive::std_dev(values)?
    } else {
        0.0
    };

    let first_value = values[0];
    let last_value = values[values.len() - 1];
    let percent_change = if first_value != 0.0 {
        (last_value - first_value) / first_value.abs() * 100.0
    } else {
        0.0
    };

    Ok(TrendSummary {
        count: values.len(),
        mean,
        min,
        max,
        std_dev,
        percent_change,
        first_value,
        last_value,
    })
}
