//! Mean, population variance, and standard deviation via `statrs`.
//!
//! Variance divides by N, not N - 1.

use statrs::statistics::Statistics;

use vitals_core::errors::{AnalysisResult, TrendError};

/// Arithmetic mean. Requires at least one value.
pub fn mean(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(TrendError::insufficient(1, 0));
    }
    finite(values.iter().mean(), "mean")
}

/// Population variance. Requires at least two values.
pub fn variance(values: &[f64]) -> AnalysisResult<f64> {
    if values.len() < 2 {
        return Err(TrendError::insufficient(2, values.len()));
    }
    // Rounding can leave a constant series a hair below zero.
    finite(values.iter().population_variance().max(0.0), "variance")
}

/// Population standard deviation. Requires at least two values.
pub fn std_dev(values: &[f64]) -> AnalysisResult<f64> {
    variance(values).map(f64::sqrt)
}

/// Smallest and largest value, `None` for an empty series.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

fn finite(value: f64, what: &str) -> AnalysisResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrendError::CalculationFailed {
            reason: format!("{what} is not finite"),
        })
    }
}
