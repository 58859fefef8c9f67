//! Bounded linear extrapolation.
//!
//! Fits the chronological series by least squares (index as x) and extends
//! the line forward. The horizon is capped; this is not a forecasting model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use vitals_core::constants::SECONDS_PER_DAY;
use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::{DataType, Measurement};

use crate::normalize;
use crate::stats::regress_series;
use crate::trend::TrendPoint;

/// Methodology label attached to every prediction.
pub const METHODOLOGY: &str = "ordinary least squares linear extrapolation";

/// Forward extrapolation of a series. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub data_type: DataType,
    pub predicted_points: Vec<TrendPoint>,
    /// r² of the fit the extrapolation is based on.
    pub confidence: f64,
    pub methodology: String,
    /// Timestamp of the last predicted point.
    pub valid_until: DateTime<Utc>,
}

/// Extrapolate `horizon` steps past the newest record of `data_type`.
///
/// The horizon is clamped to `max_horizon`; a zero horizon is an invalid period.
/// Steps are spaced by the mean interval between input records (one day when
/// all records share a timestamp).
pub fn predict(
    records: &[Measurement],
    data_type: DataType,
    horizon: u32,
    max_horizon: u32,
) -> AnalysisResult<TrendPrediction> {
    let selected: Vec<Measurement> = records
        .iter()
        .filter(|m| m.data_type == data_type)
        .cloned()
        .collect();
    let ascending = normalize::sort_chronological(&selected)?;
    let n = ascending.len();
    if n < 2 {
        return Err(TrendError::insufficient(2, n));
    }
    if horizon == 0 {
        return Err(TrendError::InvalidPeriod { period: 0, len: n });
    }

    let steps = horizon.min(max_horizon.max(1));
    if steps < horizon {
        tracing::debug!(requested = horizon, capped = steps, "prediction horizon capped");
    }

    let regression = regress_series(&normalize::values(&ascending))?;
    let first = ascending[0].timestamp;
    let last = ascending[n - 1].timestamp;
    let step = step_interval(first, last, n);

    let predicted_points = (1..=steps)
        .map(|k| {
            let x = (n - 1) as f64 + f64::from(k);
            Ok(TrendPoint {
                timestamp: step_timestamp(last, step, k)?,
                value: regression.predict(x),
                moving_average: None,
                is_anomaly: false,
            })
        })
        .collect::<AnalysisResult<Vec<TrendPoint>>>()?;

    let valid_until = predicted_points
        .last()
        .map(|p| p.timestamp)
        .unwrap_or(last);

    Ok(TrendPrediction {
        data_type,
        predicted_points,
        confidence: regression.r_squared.clamp(0.0, 1.0),
        methodology: METHODOLOGY.to_string(),
        valid_until,
    })
}

/// `last + step * k`, failing instead of overflowing the representable range.
fn step_timestamp(last: DateTime<Utc>, step: Duration, k: u32) -> AnalysisResult<DateTime<Utc>> {
    i32::try_from(k)
        .ok()
        .and_then(|k| step.checked_mul(k))
        .and_then(|offset| last.checked_add_signed(offset))
        .ok_or_else(|| TrendError::CalculationFailed {
            reason: format!("prediction step {k} falls outside the representable time range"),
        })
}

/// Mean spacing between samples, in whole milliseconds.
fn step_interval(first: DateTime<Utc>, last: DateTime<Utc>, n: usize) -> Duration {
    let span_ms = last.signed_duration_since(first).num_milliseconds();
    let step_ms = span_ms / (n as i64 - 1);
    if step_ms > 0 {
        Duration::milliseconds(step_ms)
    } else {
        Duration::seconds(SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn daily(values: &[f64]) -> Vec<Measurement> {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 6, 30, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Measurement::new(base + Duration::days(i as i64), v, DataType::Weight))
            .collect()
    }

    #[test]
    fn test_extends_line_daily() {
        let records = daily(&[80.0, 79.5, 79.0, 78.5]);
        let p = predict(&records, DataType::Weight, 3, 30).unwrap();
        assert_eq!(p.predicted_points.len(), 3);
        let values: Vec<f64> = p.predicted_points.iter().map(|t| t.value).collect();
        for (got, want) in values.iter().zip([78.0, 77.5, 77.0]) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
        assert_eq!(p.valid_until, records[3].timestamp + Duration::days(3));
        assert!((p.confidence - 1.0).abs() < 1e-12);
        assert_eq!(p.methodology, METHODOLOGY);
    }

    #[test]
    fn test_horizon_is_capped() {
        let p = predict(&daily(&[1.0, 2.0, 3.0]), DataType::Weight, 90, 30).unwrap();
        assert_eq!(p.predicted_points.len(), 30);
    }

    #[test]
    fn test_zero_horizon_is_invalid() {
        let err = predict(&daily(&[1.0, 2.0]), DataType::Weight, 0, 30).unwrap_err();
        assert!(matches!(err, TrendError::InvalidPeriod { period: 0, .. }));
    }

    #[test]
    fn test_other_data_types_ignored() {
        let err = predict(&daily(&[1.0, 2.0]), DataType::Steps, 5, 30).unwrap_err();
        assert_eq!(err, TrendError::insufficient(2, 0));
    }

    #[test]
    fn test_same_timestamp_falls_back_to_daily_steps() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let records = vec![
            Measurement::new(t, 1.0, DataType::Weight),
            Measurement::new(t, 2.0, DataType::Weight),
        ];
        let p = predict(&records, DataType::Weight, 1, 30).unwrap();
        assert_eq!(p.valid_until, t + Duration::days(1));
    }

    #[test]
    fn test_step_past_time_range_fails() {
        let last = DateTime::<Utc>::MAX_UTC - Duration::days(1);
        let err = step_timestamp(last, Duration::days(1), 2).unwrap_err();
        assert!(matches!(err, TrendError::CalculationFailed { .. }));
        assert!(step_timestamp(last, Duration::days(1), 1).is_ok());
    }
}
