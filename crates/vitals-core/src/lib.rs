//! # vitals-core
//!
//! Foundation crate for the Vitals trend analysis engine.
//! Defines the measurement model, timeframes, errors, config, tracing, and constants.
//! `vitals-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{PredictionConfig, TrendConfig, VitalsConfig};
pub use errors::{AnalysisResult, ConfigError, TrendError, VitalsErrorCode};
pub use types::{DataType, DateRange, Measurement, Timeframe};
