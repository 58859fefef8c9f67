//! Prediction configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for linear extrapolation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictionConfig {
    /// Maximum number of steps a prediction may extend. Default: 30.
    pub max_horizon_days: Option<u32>,
}

impl PredictionConfig {
    /// Returns the effective horizon cap, defaulting to 30.
    pub fn effective_max_horizon_days(&self) -> u32 {
        self.max_horizon_days
            .unwrap_or(constants::DEFAULT_MAX_HORIZON_DAYS)
    }
}
