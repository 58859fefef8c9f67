//! Error taxonomy and error code tests.

use vitals_core::errors::{ConfigError, TrendError, VitalsErrorCode};

#[test]
fn every_trend_error_has_a_distinct_code() {
    let errors = [
        TrendError::insufficient(2, 1),
        TrendError::InvalidPeriod { period: 0, len: 3 },
        TrendError::InvalidTimeframe("fortnight".to_string()),
        TrendError::CalculationFailed {
            reason: "non-finite value".to_string(),
        },
    ];
    let codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(
        codes,
        [
            "INSUFFICIENT_DATA",
            "INVALID_PERIOD",
            "INVALID_TIMEFRAME",
            "CALCULATION_FAILED"
        ]
    );
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = TrendError::insufficient(2, 0);
    assert_eq!(
        err.coded_string(),
        "[INSUFFICIENT_DATA] Insufficient data: need at least 2 points, got 0"
    );
}

#[test]
fn config_errors_share_one_code() {
    let err = ConfigError::ValidationFailed {
        field: "trend.sensitivity".to_string(),
        message: "must be a finite value >= 0.0".to_string(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("trend.sensitivity"));
}
