//! Trend classification configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for trend classification and windowing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Normalized per-step slope threshold for stable vs directional. Default: 0.01.
    pub sensitivity: Option<f64>,
    /// Fraction of direction flips that marks a series as choppy. Default: 0.6.
    pub volatility_ratio: Option<f64>,
    /// Coefficient of variation a choppy series needs to be volatile. Default: 0.05.
    pub dispersion_threshold: Option<f64>,
    /// Moving-average period override. Default: the timeframe's window.
    pub moving_average_window: Option<usize>,
}

impl TrendConfig {
    /// Returns the effective sensitivity, defaulting to 0.01.
    pub fn effective_sensitivity(&self) -> f64 {
        self.sensitivity.unwrap_or(constants::DEFAULT_SENSITIVITY)
    }

    /// Returns the effective volatility ratio, defaulting to 0.6.
    pub fn effective_volatility_ratio(&self) -> f64 {
        self.volatility_ratio
            .unwrap_or(constants::DEFAULT_VOLATILITY_RATIO)
    }

    /// Returns the effective dispersion threshold, defaulting to 0.05.
    pub fn effective_dispersion_threshold(&self) -> f64 {
        self.dispersion_threshold
            .unwrap_or(constants::DEFAULT_DISPERSION_THRESHOLD)
    }
}
