use chrono::{DateTime, Duration, TimeZone, Utc};

use vitals_analysis::anomalies::{detect_with_context, detector::deviation_score};
use vitals_analysis::{AnomalySeverity, TrendEngine, TrendParams};
use vitals_core::errors::TrendError;
use vitals_core::types::{DataType, Measurement, Timeframe};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 5, 30, 0).unwrap()
}

fn heart_rate(values: &[f64]) -> Vec<Measurement> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Measurement::new(base() + Duration::hours(i as i64), v, DataType::HeartRate))
        .collect()
}

#[test]
fn test_large_spike_is_critical() {
    let mut values = vec![50.0; 19];
    values.push(100.0);
    let anomalies = TrendEngine::new().detect_anomalies(&heart_rate(&values)).unwrap();
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].severity, AnomalySeverity::Critical);
    assert!(anomalies[0].deviation_score > 4.0);
    assert_eq!(anomalies[0].expected_value, 52.5);
}

#[test]
fn test_mild_deviations_are_low() {
    // mean 10, stdDev √3.6 ≈ 1.90 → both outliers score ≈ 1.58.
    let anomalies = TrendEngine::new()
        .detect_anomalies(&heart_rate(&[10.0, 10.0, 10.0, 13.0, 7.0]))
        .unwrap();
    assert_eq!(anomalies.len(), 2);
    assert!(anomalies.iter().all(|a| a.severity == AnomalySeverity::Low));
    assert_eq!(anomalies[0].value, 13.0);
    assert_eq!(anomalies[1].value, 7.0);
}

#[test]
fn test_output_is_chronological() {
    let records = heart_rate(&[120.0, 60.0, 61.0, 59.0, 60.0, 62.0, 58.0, 60.0, 20.0]);
    let mut reversed = records.clone();
    reversed.reverse();
    let anomalies = TrendEngine::new().detect_anomalies(&reversed).unwrap();
    assert_eq!(anomalies.len(), 2);
    assert!(anomalies[0].timestamp < anomalies[1].timestamp);
    assert_eq!(anomalies[0].value, 120.0);
}

#[test]
fn test_every_flagged_score_meets_its_tier() {
    let records = heart_rate(&[55.0, 90.0, 57.0, 140.0, 60.0, 58.0, 25.0, 61.0, 59.0, 62.0]);
    for a in TrendEngine::new().detect_anomalies(&records).unwrap() {
        assert!(a.deviation_score >= 1.5);
        assert_eq!(AnomalySeverity::from_score(a.deviation_score), Some(a.severity));
        assert!(a.deviation_score >= a.severity.threshold());
    }
}

#[test]
fn test_context_uses_local_average() {
    let records = heart_rate(&[70.0, 70.0, 70.0, 70.0, 95.0]);
    let ma = TrendEngine::new()
        .calculate_moving_average(&records, 3)
        .unwrap();
    let anomalies = detect_with_context(&records, &ma).unwrap();
    assert_eq!(anomalies.len(), 1);
    assert!((anomalies[0].expected_value - 235.0 / 3.0).abs() < 1e-9);
    // The score still comes from the global distribution.
    assert_eq!(anomalies[0].deviation_score, 2.0);
}

#[test]
fn test_zero_spread_scores_zero() {
    assert_eq!(deviation_score(80.0, 70.0, 0.0), 0.0);
    assert_eq!(deviation_score(80.0, 70.0, 5.0), 2.0);
}

#[test]
fn test_one_record_is_insufficient() {
    let err = TrendEngine::new()
        .detect_anomalies(&heart_rate(&[70.0]))
        .unwrap_err();
    assert_eq!(err, TrendError::insufficient(2, 1));
}

#[test]
fn test_context_keeps_each_duplicate_on_its_own_window() {
    // Eight steady readings, then a spike and two readings sharing one timestamp.
    let mut records = heart_rate(&[70.0; 8]);
    let shared = base() + Duration::hours(9);
    records.push(Measurement::new(base() + Duration::hours(8), 100.0, DataType::HeartRate));
    records.push(Measurement::new(shared, 10.0, DataType::HeartRate));
    records.push(Measurement::new(shared, 70.0, DataType::HeartRate));

    let engine = TrendEngine::with_params(TrendParams {
        moving_average_window: Some(2),
        ..TrendParams::default()
    });
    let ma = engine.calculate_moving_average(&records, 2).unwrap();
    let with_context: Vec<(f64, f64)> = detect_with_context(&records, &ma)
        .unwrap()
        .iter()
        .map(|a| (a.value, a.expected_value))
        .collect();
    assert_eq!(with_context, vec![(100.0, 85.0), (10.0, 55.0)]);

    let analysis = engine
        .analyze_trend(&records, DataType::HeartRate, Timeframe::Week, shared)
        .unwrap();
    let from_analysis: Vec<(f64, f64)> = analysis
        .anomalies
        .iter()
        .map(|a| (a.value, a.expected_value))
        .collect();
    assert_eq!(from_analysis, with_context);
    assert_eq!(analysis.trend_points[9].moving_average, Some(55.0));
    assert_eq!(analysis.trend_points[10].moving_average, Some(40.0));
}

#[test]
fn test_context_longer_than_series_is_rejected() {
    let records = heart_rate(&[70.0, 72.0]);
    let ma = TrendEngine::new()
        .calculate_moving_average(&heart_rate(&[1.0, 2.0, 3.0]), 1)
        .unwrap();
    let err = detect_with_context(&records, &ma).unwrap_err();
    assert!(matches!(err, TrendError::CalculationFailed { .. }));
}
