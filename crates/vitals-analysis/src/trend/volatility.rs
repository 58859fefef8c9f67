//! Local variability of a series.
//!
//! Two signals: how often consecutive non-zero deltas flip sign, and the
//! coefficient of variation (stdDev / |mean|).

use vitals_core::constants::MIN_VOLATILITY_DELTAS;
use vitals_core::errors::AnalysisResult;

use crate::stats::descriptive;

/// Variability measurements for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityProfile {
    /// Count of non-zero consecutive deltas.
    pub nonzero_deltas: usize,
    /// Sign flips between consecutive non-zero deltas, as a fraction of possible flips.
    pub sign_change_ratio: f64,
    /// stdDev / |mean|; infinite when the mean is zero but the values are not.
    pub coefficient_of_variation: f64,
}

impl VolatilityProfile {
    /// Profile a chronological series of at least two values.
    pub fn of(values: &[f64]) -> AnalysisResult<Self> {
        let std_dev = descriptive::std_dev(values)?;
        let mean = descriptive::mean(values)?;

        let deltas: Vec<f64> = values
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|d| *d != 0.0)
            .collect();
        let flips = deltas
            .windows(2)
            .filter(|w| w[0].signum() != w[1].signum())
            .count();
        let sign_change_ratio = if deltas.len() > 1 {
            flips as f64 / (deltas.len() - 1) as f64
        } else {
            0.0
        };

        let coefficient_of_variation = if mean.abs() > f64::EPSILON {
            std_dev / mean.abs()
        } else if std_dev > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };

        Ok(Self {
            nonzero_deltas: deltas.len(),
            sign_change_ratio,
            coefficient_of_variation,
        })
    }

    /// Whether the series is too choppy and dispersed for a directional call.
    pub fn is_volatile(&self, volatility_ratio: f64, dispersion_threshold: f64) -> bool {
        self.nonzero_deltas >= MIN_VOLATILITY_DELTAS
            && self.sign_change_ratio >= volatility_ratio
            && self.coefficient_of_variation >= dispersion_threshold
    }
}
