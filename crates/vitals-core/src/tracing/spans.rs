//! Span definitions per engine operation: trend, report, moving average, anomalies, prediction.

/// Create a trend analysis span.
#[macro_export]
macro_rules! trend_span {
    ($timeframe:expr, $records:expr) => {
        tracing::debug_span!("vitals.trend", timeframe = %$timeframe, records = $records)
    };
}

/// Create a report generation span.
#[macro_export]
macro_rules! report_span {
    ($timeframe:expr, $records:expr) => {
        tracing::debug_span!("vitals.report", timeframe = %$timeframe, records = $records)
    };
}

/// Create a moving average span.
#[macro_export]
macro_rules! moving_average_span {
    ($period:expr, $records:expr) => {
        tracing::debug_span!("vitals.moving_average", period = $period, records = $records)
    };
}

/// Create an anomaly detection span.
#[macro_export]
macro_rules! anomalies_span {
    ($records:expr) => {
        tracing::debug_span!("vitals.anomalies", records = $records)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($data_type:expr, $horizon:expr) => {
        tracing::debug_span!("vitals.prediction", data_type = %$data_type, horizon = $horizon)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TREND: &str = "vitals.trend";
    pub const REPORT: &str = "vitals.report";
    pub const MOVING_AVERAGE: &str = "vitals.moving_average";
    pub const ANOMALIES: &str = "vitals.anomalies";
    pub const PREDICTION: &str = "vitals.prediction";
}
