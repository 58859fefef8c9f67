//! End-to-end scenarios over small, hand-checked series.

use chrono::{DateTime, Duration, TimeZone, Utc};

use vitals_analysis::{AnomalySeverity, TrendDirection, TrendEngine};
use vitals_core::errors::TrendError;
use vitals_core::types::{DataType, Measurement, Timeframe};

fn day0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 7, 15, 0).unwrap()
}

fn weights(values: &[f64]) -> Vec<Measurement> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Measurement::new(day0() + Duration::days(i as i64), v, DataType::Weight))
        .collect()
}

// ---- A: constant series ----

#[test]
fn scenario_a_constant_series_is_stable() {
    let engine = TrendEngine::new();
    let records = weights(&[70.0, 70.0, 70.0]);

    let trend = engine.classify_trend(&records, Timeframe::Week).unwrap();
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_eq!(trend.slope, 0.0);

    assert!(engine.detect_anomalies(&records).unwrap().is_empty());

    let report = engine.generate_analysis_report(&records, Timeframe::Week).unwrap();
    assert!(report.trend_points.iter().all(|p| !p.is_anomaly));
    assert_eq!(report.variance, 0.0);
}

// ---- B: perfect daily decline ----

#[test]
fn scenario_b_perfect_decline() {
    let engine = TrendEngine::new();
    let records = weights(&[72.0, 71.0, 70.0, 69.0, 68.0]);

    let trend = engine.classify_trend(&records, Timeframe::Week).unwrap();
    assert_eq!(trend.direction, TrendDirection::Decreasing);
    assert!(trend.slope < 0.0);
    assert!(trend.strength > 0.9, "strength {}", trend.strength);
    assert!(trend.confidence > 0.9, "confidence {}", trend.confidence);
}

// ---- C: one spike ----

#[test]
fn scenario_c_spike_is_flagged() {
    let engine = TrendEngine::new();
    let records = weights(&[70.0, 70.0, 70.0, 70.0, 95.0]);

    let anomalies = engine.detect_anomalies(&records).unwrap();
    assert_eq!(anomalies.len(), 1);
    let spike = &anomalies[0];
    assert_eq!(spike.value, 95.0);
    assert_eq!(spike.timestamp, records[4].timestamp);
    // mean 75, population stdDev 10 → exactly two deviations.
    assert_eq!(spike.deviation_score, 2.0);
    assert_eq!(spike.severity, AnomalySeverity::Medium);

    let ma = engine.calculate_moving_average(&records, 2).unwrap();
    assert_eq!(ma.len(), 4);
}

// ---- D: empty report ----

#[test]
fn scenario_d_empty_report_is_insufficient() {
    let err = TrendEngine::new()
        .generate_analysis_report(&[], Timeframe::Month)
        .unwrap_err();
    assert!(matches!(err, TrendError::InsufficientData { actual: 0, .. }));
}

// ---- E: period longer than the series ----

#[test]
fn scenario_e_long_period_is_insufficient() {
    let err = TrendEngine::new()
        .calculate_moving_average(&weights(&[70.0, 71.0, 72.0]), 10)
        .unwrap_err();
    assert_eq!(
        err,
        TrendError::InsufficientData {
            required: 10,
            actual: 3
        }
    );
}
