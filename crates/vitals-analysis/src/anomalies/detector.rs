//! Global z-score detection with optional moving-average context.

use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::Measurement;

use super::types::{AnomalyPoint, AnomalySeverity};
use crate::aggregation::moving_average::{aligned, MovingAveragePoint};
use crate::normalize;
use crate::stats::descriptive;

/// Detect anomalies in an unordered record set. `expected_value` is the series mean.
///
/// Requires at least two records. Output is in ascending timestamp order.
pub fn detect(records: &[Measurement]) -> AnalysisResult<Vec<AnomalyPoint>> {
    let ascending = normalize::sort_chronological(records)?;
    let scored = score_sorted(&ascending, &[])?;
    Ok(scored.into_iter().map(|(_, point)| point).collect())
}

/// Detect anomalies, using the moving average at each sample's position as
/// `expected_value` where one exists.
///
/// `moving_average` must come from [`moving_average`](crate::aggregation::moving_average)
/// over the same records: it is aligned by position against the newest end of
/// the sorted series, so samples sharing a timestamp keep their own window.
pub fn detect_with_context(
    records: &[Measurement],
    moving_average: &[MovingAveragePoint],
) -> AnalysisResult<Vec<AnomalyPoint>> {
    let ascending = normalize::sort_chronological(records)?;
    if moving_average.len() > ascending.len() {
        return Err(TrendError::CalculationFailed {
            reason: format!(
                "moving average has {} points for a series of {}",
                moving_average.len(),
                ascending.len()
            ),
        });
    }
    let local = aligned(ascending.len(), moving_average);
    let scored = score_sorted(&ascending, &local)?;
    Ok(scored.into_iter().map(|(_, point)| point).collect())
}

/// Score an ascending series. `local_expected` is either empty or aligned by index.
/// Returns each anomaly with its index into `ascending`.
pub(crate) fn score_sorted(
    ascending: &[Measurement],
    local_expected: &[Option<f64>],
) -> AnalysisResult<Vec<(usize, AnomalyPoint)>> {
    let values = normalize::values(ascending);
    let mean = descriptive::mean(&values)?;
    let std_dev = descriptive::std_dev(&values)?;

    let anomalies: Vec<(usize, AnomalyPoint)> = ascending
        .iter()
        .enumerate()
        .filter_map(|(i, m)| {
            let score = deviation_score(m.value, mean, std_dev);
            let severity = AnomalySeverity::from_score(score)?;
            let expected_value = local_expected.get(i).copied().flatten().unwrap_or(mean);
            Some((
                i,
                AnomalyPoint {
                    timestamp: m.timestamp,
                    value: m.value,
                    expected_value,
                    deviation_score: score,
                    severity,
                },
            ))
        })
        .collect();

    tracing::debug!(
        points = ascending.len(),
        mean,
        std_dev,
        anomalies = anomalies.len(),
        "scored anomalies"
    );
    Ok(anomalies)
}

/// Standard deviations between `value` and `mean`; 0 for a zero-spread series.
pub fn deviation_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 && std_dev.is_finite() {
        (value - mean).abs() / std_dev
    } else {
        0.0
    }
}
