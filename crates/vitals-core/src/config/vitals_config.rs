//! Top-level Vitals configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PredictionConfig, TrendConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the root passed to [`VitalsConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "vitals.toml";

/// Environment variables recognized by [`VitalsConfig::load`].
pub const ENV_VARS: [&str; 5] = [
    "VITALS_TREND_SENSITIVITY",
    "VITALS_TREND_VOLATILITY_RATIO",
    "VITALS_TREND_DISPERSION_THRESHOLD",
    "VITALS_TREND_MOVING_AVERAGE_WINDOW",
    "VITALS_PREDICTION_MAX_HORIZON_DAYS",
];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VITALS_*`)
/// 2. Project config (`vitals.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VitalsConfig {
    pub trend: TrendConfig,
    pub prediction: PredictionConfig,
}

impl VitalsConfig {
    /// Load configuration with layered resolution and validate the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(sensitivity) = self.trend.sensitivity {
            if !sensitivity.is_finite() || sensitivity < 0.0 {
                return Err(validation("trend.sensitivity", "must be a finite value >= 0.0"));
            }
        }
        if let Some(ratio) = self.trend.volatility_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(validation("trend.volatility_ratio", "must be between 0.0 and 1.0"));
            }
        }
        if let Some(dispersion) = self.trend.dispersion_threshold {
            if !dispersion.is_finite() || dispersion < 0.0 {
                return Err(validation(
                    "trend.dispersion_threshold",
                    "must be a finite value >= 0.0",
                ));
            }
        }
        if self.trend.moving_average_window == Some(0) {
            return Err(validation("trend.moving_average_window", "must be greater than 0"));
        }
        if self.prediction.max_horizon_days == Some(0) {
            return Err(validation("prediction.max_horizon_days", "must be greater than 0"));
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut VitalsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VitalsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut VitalsConfig, other: &VitalsConfig) {
        if other.trend.sensitivity.is_some() {
            base.trend.sensitivity = other.trend.sensitivity;
        }
        if other.trend.volatility_ratio.is_some() {
            base.trend.volatility_ratio = other.trend.volatility_ratio;
        }
        if other.trend.dispersion_threshold.is_some() {
            base.trend.dispersion_threshold = other.trend.dispersion_threshold;
        }
        if other.trend.moving_average_window.is_some() {
            base.trend.moving_average_window = other.trend.moving_average_window;
        }
        if other.prediction.max_horizon_days.is_some() {
            base.prediction.max_horizon_days = other.prediction.max_horizon_days;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VITALS_TREND_SENSITIVITY`, `VITALS_PREDICTION_MAX_HORIZON_DAYS`, etc.
    fn apply_env_overrides(config: &mut VitalsConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<f64>("VITALS_TREND_SENSITIVITY")? {
            config.trend.sensitivity = Some(v);
        }
        if let Some(v) = env_value::<f64>("VITALS_TREND_VOLATILITY_RATIO")? {
            config.trend.volatility_ratio = Some(v);
        }
        if let Some(v) = env_value::<f64>("VITALS_TREND_DISPERSION_THRESHOLD")? {
            config.trend.dispersion_threshold = Some(v);
        }
        if let Some(v) = env_value::<usize>("VITALS_TREND_MOVING_AVERAGE_WINDOW")? {
            config.trend.moving_average_window = Some(v);
        }
        if let Some(v) = env_value::<u32>("VITALS_PREDICTION_MAX_HORIZON_DAYS")? {
            config.prediction.max_horizon_days = Some(v);
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Read and parse an environment variable. Unset → `None`, unparsable → `InvalidValue`.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}
