//! Simple moving average over consecutive samples.
//!
//! Windows are taken over the series in descending timestamp order: window `i`
//! covers samples `i..i + period`, newest first. Each output point carries the
//! newest timestamp and raw value of its window. `N - period + 1` points are
//! produced and returned in ascending timestamp order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::Measurement;

use crate::normalize;

/// One averaged window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    /// Newest timestamp in the window.
    pub timestamp: DateTime<Utc>,
    /// Mean of the window.
    pub value: f64,
    /// Raw value of the newest sample in the window.
    pub original_value: f64,
}

/// Moving average of an unordered record set.
///
/// `period == 0` is an invalid period; a period longer than the series is
/// insufficient data.
pub fn moving_average(
    records: &[Measurement],
    period: usize,
) -> AnalysisResult<Vec<MovingAveragePoint>> {
    check_period(period, records.len())?;
    let ascending = normalize::sort_chronological(records)?;
    Ok(over_sorted(&ascending, period))
}

/// Validate a period against a series length.
pub fn check_period(period: usize, len: usize) -> AnalysisResult<()> {
    if period == 0 {
        tracing::warn!(period, len, "moving average period must be positive");
        return Err(TrendError::InvalidPeriod { period, len });
    }
    if period > len {
        return Err(TrendError::insufficient(period, len));
    }
    Ok(())
}

/// Moving average over an ascending series whose length is at least `period`.
///
/// Each window is summed from scratch rather than with a running sum so that a
/// window of one reproduces the raw values exactly.
pub(crate) fn over_sorted(ascending: &[Measurement], period: usize) -> Vec<MovingAveragePoint> {
    if period == 0 || period > ascending.len() {
        return Vec::new();
    }
    let descending: Vec<&Measurement> = ascending.iter().rev().collect();

    let mut points: Vec<MovingAveragePoint> = descending
        .windows(period)
        .map(|window| {
            let newest = window[0];
            let sum: f64 = window.iter().map(|m| m.value).sum();
            MovingAveragePoint {
                timestamp: newest.timestamp,
                value: sum / period as f64,
                original_value: newest.value,
            }
        })
        .collect();

    points.reverse();
    points
}

/// Moving-average value for each sample of an ascending series, aligned by index.
/// Samples older than the first full window get `None`.
pub(crate) fn aligned(
    series_len: usize,
    points: &[MovingAveragePoint],
) -> Vec<Option<f64>> {
    if points.is_empty() || points.len() > series_len {
        return vec![None; series_len];
    }
    let offset = series_len - points.len();
    (0..series_len)
        .map(|i| i.checked_sub(offset).map(|j| points[j].value))
        .collect()
}
