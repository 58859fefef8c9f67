//! Multi-criterion trend classifier.
//!
//! 1. Volatile if the series flips direction often and is dispersed.
//! 2. Otherwise compare the slope, normalized by |mean|, against `sensitivity`:
//!    above → increasing, below the negative → decreasing, else stable.
//!
//! strength = |correlation|, confidence = r². They are reported separately:
//! a steady but noisy climb can be strong yet poorly explained.

use vitals_core::config::TrendConfig;
use vitals_core::constants;
use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::{Measurement, Timeframe};

use super::types::{Qualitative, TrendDirection, TrendResult};
use super::volatility::VolatilityProfile;
use crate::normalize;
use crate::stats::{descriptive, regress_series, Regression};

/// Thresholds used by [`TrendClassifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierParams {
    /// Normalized per-step slope threshold for stable vs directional.
    pub sensitivity: f64,
    /// Sign-change ratio at which a series may be volatile.
    pub volatility_ratio: f64,
    /// Coefficient of variation at which a choppy series is volatile.
    pub dispersion_threshold: f64,
}

impl ClassifierParams {
    pub fn from_config(config: &TrendConfig) -> Self {
        Self {
            sensitivity: config.effective_sensitivity(),
            volatility_ratio: config.effective_volatility_ratio(),
            dispersion_threshold: config.effective_dispersion_threshold(),
        }
    }
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            sensitivity: constants::DEFAULT_SENSITIVITY,
            volatility_ratio: constants::DEFAULT_VOLATILITY_RATIO,
            dispersion_threshold: constants::DEFAULT_DISPERSION_THRESHOLD,
        }
    }
}

/// Maps a series to a direction with strength and confidence.
#[derive(Debug, Clone, Default)]
pub struct TrendClassifier {
    params: ClassifierParams,
}

impl TrendClassifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Classify an unordered record set. Sorting happens here, so input
    /// order does not affect the result.
    pub fn classify(
        &self,
        records: &[Measurement],
        timeframe: Timeframe,
    ) -> AnalysisResult<TrendResult> {
        let sorted = normalize::sort_chronological(records)?;
        self.classify_values(&normalize::values(&sorted), timeframe)
    }

    /// Classify a chronologically ordered value series.
    pub fn classify_values(&self, values: &[f64], timeframe: Timeframe) -> AnalysisResult<TrendResult> {
        self.classify_with_regression(values, timeframe)
            .map(|(result, _)| result)
    }

    /// Classify and also return the underlying fit.
    pub fn classify_with_regression(
        &self,
        values: &[f64],
        timeframe: Timeframe,
    ) -> AnalysisResult<(TrendResult, Regression)> {
        if values.len() < 2 {
            return Err(TrendError::insufficient(2, values.len()));
        }

        let regression = regress_series(values)?;
        let direction = self.direction(values, &regression)?;
        let strength = regression.correlation.abs().clamp(0.0, 1.0);
        let confidence = regression.r_squared.clamp(0.0, 1.0);

        tracing::debug!(
            points = values.len(),
            slope = regression.slope,
            strength,
            confidence,
            direction = %direction,
            "classified trend"
        );

        let result = TrendResult {
            direction,
            strength,
            confidence,
            slope: regression.slope,
            analysis: describe(direction, strength, confidence, timeframe),
        };
        Ok((result, regression))
    }

    fn direction(&self, values: &[f64], regression: &Regression) -> AnalysisResult<TrendDirection> {
        let profile = VolatilityProfile::of(values)?;
        if profile.is_volatile(self.params.volatility_ratio, self.params.dispersion_threshold) {
            return Ok(TrendDirection::Volatile);
        }

        let normalized = normalized_slope(regression.slope, descriptive::mean(values)?);
        let direction = if normalized > self.params.sensitivity {
            TrendDirection::Increasing
        } else if normalized < -self.params.sensitivity {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };
        Ok(direction)
    }
}

/// Slope relative to the series level, so one threshold fits kilograms and step counts.
pub fn normalized_slope(slope: f64, mean: f64) -> f64 {
    if mean.abs() > f64::EPSILON {
        slope / mean.abs()
    } else {
        slope
    }
}

/// One sentence carrying direction, qualitative strength and confidence, and the timeframe.
pub fn describe(
    direction: TrendDirection,
    strength: f64,
    confidence: f64,
    timeframe: Timeframe,
) -> String {
    format!(
        "{} trend over the past {} with {} strength ({:.2}) and {} confidence ({:.2}).",
        direction.title(),
        timeframe.label(),
        Qualitative::from_score(strength),
        strength,
        Qualitative::from_score(confidence),
        confidence,
    )
}
