//! Error handling for Vitals.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod trend_error;

pub use config_error::ConfigError;
pub use error_code::VitalsErrorCode;
pub use trend_error::{AnalysisResult, TrendError};
