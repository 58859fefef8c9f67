//! Input normalizer: validates a record set and orders it chronologically.

use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::{DataType, DateRange, Measurement};

/// Sort records ascending by timestamp.
///
/// The sort is stable: records sharing a timestamp keep their input order.
/// Non-finite values are rejected.
pub fn sort_chronological(records: &[Measurement]) -> AnalysisResult<Vec<Measurement>> {
    validate(records)?;
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|m| m.timestamp);
    Ok(sorted)
}

/// Restrict records to the inclusive `range`, then sort ascending.
pub fn normalize(records: &[Measurement], range: &DateRange) -> AnalysisResult<Vec<Measurement>> {
    let in_range: Vec<Measurement> = records
        .iter()
        .filter(|m| range.contains(m.timestamp))
        .cloned()
        .collect();
    sort_chronological(&in_range)
}

/// Restrict records to one data type within the inclusive `range`, then sort ascending.
pub fn select(
    records: &[Measurement],
    data_type: DataType,
    range: &DateRange,
) -> AnalysisResult<Vec<Measurement>> {
    let selected: Vec<Measurement> = records
        .iter()
        .filter(|m| m.data_type == data_type && range.contains(m.timestamp))
        .cloned()
        .collect();
    sort_chronological(&selected)
}

/// Extract the value series.
pub fn values(records: &[Measurement]) -> Vec<f64> {
    records.iter().map(|m| m.value).collect()
}

fn validate(records: &[Measurement]) -> AnalysisResult<()> {
    if let Some(bad) = records.iter().find(|m| !m.value.is_finite()) {
        tracing::warn!(timestamp = %bad.timestamp, value = bad.value, "rejecting non-finite measurement");
        return Err(TrendError::CalculationFailed {
            reason: format!("non-finite value {} at {}", bad.value, bad.timestamp),
        });
    }
    Ok(())
}
