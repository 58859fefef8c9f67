//! Assembles an [`AnalysisReport`] from a record set.

use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::{Measurement, Timeframe};

use super::text::{render_summary, SummaryFields};
use super::types::AnalysisReport;
use crate::aggregation::moving_average::{self, MovingAveragePoint};
use crate::anomalies::detector;
use crate::normalize;
use crate::stats::{descriptive, summarize};
use crate::trend::{TrendClassifier, TrendPoint};

/// Build the full report for `timeframe`.
///
/// The moving average is only computed when there are at least `period`
/// records. Classification and variance need two records, so a single
/// record fails with `InsufficientData` rather than yielding a partial report.
pub fn generate_analysis_report(
    records: &[Measurement],
    timeframe: Timeframe,
    period: usize,
    classifier: &TrendClassifier,
) -> AnalysisResult<AnalysisReport> {
    let _span = vitals_core::report_span!(timeframe, records.len()).entered();

    if records.is_empty() {
        return Err(TrendError::insufficient(1, 0));
    }
    if period == 0 {
        return Err(TrendError::InvalidPeriod {
            period,
            len: records.len(),
        });
    }

    let ascending = normalize::sort_chronological(records)?;
    let values = normalize::values(&ascending);

    let trend = classifier.classify_values(&values, timeframe)?;
    let variance = descriptive::variance(&values)?;
    let summary = summarize(&values)?;

    let window_averages = if ascending.len() >= period {
        Some(moving_average::over_sorted(&ascending, period))
    } else {
        tracing::debug!(
            records = ascending.len(),
            period,
            "too few records for a moving average"
        );
        None
    };

    let local = window_averages
        .as_deref()
        .map(|ma| moving_average::aligned(ascending.len(), ma))
        .unwrap_or_default();
    let anomalous: Vec<usize> = detector::score_sorted(&ascending, &local)?
        .into_iter()
        .map(|(i, _)| i)
        .collect();
    let trend_points = build_trend_points(&ascending, window_averages.as_deref(), &anomalous);

    let text = render_summary(&SummaryFields {
        timeframe,
        record_count: ascending.len(),
        mean: summary.mean,
        min: summary.min,
        max: summary.max,
        variance,
        analysis: &trend.analysis,
    });

    Ok(AnalysisReport {
        timeframe,
        record_count: ascending.len(),
        trend,
        trend_points,
        moving_average_period: period,
        moving_average: window_averages,
        variance,
        summary: text,
    })
}

/// One [`TrendPoint`] per sample of an ascending series.
///
/// `window_averages` is aligned to the newest end of the series; `anomalous`
/// holds indices into `ascending`.
pub fn build_trend_points(
    ascending: &[Measurement],
    window_averages: Option<&[MovingAveragePoint]>,
    anomalous: &[usize],
) -> Vec<TrendPoint> {
    let averages = moving_average::aligned(ascending.len(), window_averages.unwrap_or_default());
    let mut flagged = vec![false; ascending.len()];
    for &i in anomalous {
        if let Some(flag) = flagged.get_mut(i) {
            *flag = true;
        }
    }
    ascending
        .iter()
        .zip(averages)
        .zip(flagged)
        .map(|((m, avg), is_anomaly)| TrendPoint {
            timestamp: m.timestamp,
            value: m.value,
            moving_average: avg,
            is_anomaly,
        })
        .collect()
}
