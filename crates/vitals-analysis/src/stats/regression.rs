//! Ordinary least squares over `(x, y)` points.
//!
//! ```text
//! slope       = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept   = ȳ - slope · x̄
//! correlation = Σ(x - x̄)(y - ȳ) / √(Σ(x - x̄)² · Σ(y - ȳ)²)
//! r_squared   = correlation²
//! ```
//!
//! Zero spread in x or y yields slope 0, correlation 0, r² 0 instead of
//! dividing by zero.

use serde::{Deserialize, Serialize};

use vitals_core::errors::{AnalysisResult, TrendError};

/// Result of a least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation in [-1.0, 1.0].
    pub correlation: f64,
    /// Coefficient of determination in [0.0, 1.0].
    pub r_squared: f64,
    /// Number of points fitted.
    pub n: usize,
}

impl Regression {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through `points`. Requires at least two points.
pub fn linear_regression(points: &[(f64, f64)]) -> AnalysisResult<Regression> {
    let n = points.len();
    if n < 2 {
        return Err(TrendError::insufficient(2, n));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(TrendError::CalculationFailed {
            reason: "regression input contains a non-finite coordinate".to_string(),
        });
    }

    let count = n as f64;
    let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / count;
    let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / count;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        let dx = x - x_mean;
        let dy = y - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = y_mean - slope * x_mean;
    let correlation = if sxx > 0.0 && syy > 0.0 {
        (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    if !slope.is_finite() || !intercept.is_finite() || !correlation.is_finite() {
        return Err(TrendError::CalculationFailed {
            reason: "regression overflowed".to_string(),
        });
    }

    Ok(Regression {
        slope,
        intercept,
        correlation,
        r_squared: (correlation * correlation).clamp(0.0, 1.0),
        n,
    })
}

/// Fit a line through a value series using the index as x.
pub fn regress_series(values: &[f64]) -> AnalysisResult<Regression> {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64, y))
        .collect();
    linear_regression(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_decreasing_line() {
        let r = regress_series(&[72.0, 71.0, 70.0, 69.0, 68.0]).unwrap();
        assert!((r.slope + 1.0).abs() < 1e-12);
        assert!((r.intercept - 72.0).abs() < 1e-12);
        assert!((r.correlation + 1.0).abs() < 1e-12);
        assert!((r.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(r.n, 5);
    }

    #[test]
    fn test_constant_series_is_degenerate_not_error() {
        let r = regress_series(&[70.0, 70.0, 70.0]).unwrap();
        assert_eq!(r.slope, 0.0);
        assert_eq!(r.correlation, 0.0);
        assert_eq!(r.r_squared, 0.0);
        assert_eq!(r.intercept, 70.0);
    }

    #[test]
    fn test_zero_spread_in_x() {
        let r = linear_regression(&[(1.0, 2.0), (1.0, 5.0)]).unwrap();
        assert_eq!(r.slope, 0.0);
        assert_eq!(r.correlation, 0.0);
        assert_eq!(r.intercept, 3.5);
    }

    #[test]
    fn test_noisy_series_has_partial_fit() {
        let r = regress_series(&[1.0, 3.0, 2.0, 5.0, 4.0, 6.0]).unwrap();
        assert!(r.slope > 0.0);
        assert!(r.correlation > 0.5 && r.correlation < 1.0);
        assert!((r.r_squared - r.correlation * r.correlation).abs() < 1e-12);
    }

    #[test]
    fn test_needs_two_points() {
        assert_eq!(regress_series(&[1.0]).unwrap_err(), TrendError::insufficient(2, 1));
        assert_eq!(regress_series(&[]).unwrap_err(), TrendError::insufficient(2, 0));
    }

    #[test]
    fn test_predict_on_fitted_line() {
        let r = regress_series(&[10.0, 12.0, 14.0]).unwrap();
        assert!((r.predict(5.0) - 20.0).abs() < 1e-12);
    }
}
