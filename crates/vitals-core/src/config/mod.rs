//! Configuration system for Vitals.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod prediction_config;
pub mod trend_config;
pub mod vitals_config;

pub use prediction_config::PredictionConfig;
pub use trend_config::TrendConfig;
pub use vitals_config::VitalsConfig;
