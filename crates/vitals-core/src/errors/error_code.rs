//! VitalsErrorCode trait for presentation-layer error mapping.

/// Stable error codes for every Vitals error enum.
/// The engine produces no user-facing text of its own; presentation layers
/// localize on these codes.
pub trait VitalsErrorCode {
    /// Returns the error code string (e.g., "INSUFFICIENT_DATA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const INVALID_PERIOD: &str = "INVALID_PERIOD";
pub const INVALID_TIMEFRAME: &str = "INVALID_TIMEFRAME";
pub const CALCULATION_FAILED: &str = "CALCULATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
