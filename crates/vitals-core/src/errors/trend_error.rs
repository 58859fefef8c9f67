//! Trend analysis errors.

use super::error_code::{self, VitalsErrorCode};

/// Errors surfaced by every trend analysis operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrendError {
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid period {period} for a series of {len} points")]
    InvalidPeriod { period: usize, len: usize },

    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("Calculation failed: {reason}")]
    CalculationFailed { reason: String },
}

impl TrendError {
    /// Shorthand for `InsufficientData`.
    pub fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

impl VitalsErrorCode for TrendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::InvalidPeriod { .. } => error_code::INVALID_PERIOD,
            Self::InvalidTimeframe(_) => error_code::INVALID_TIMEFRAME,
            Self::CalculationFailed { .. } => error_code::CALCULATION_FAILED,
        }
    }
}

/// Result alias for trend analysis operations.
pub type AnalysisResult<T> = Result<T, TrendError>;
