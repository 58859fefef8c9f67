//! Multi-line report text.

use vitals_core::types::Timeframe;

/// Inputs for [`render_summary`].
#[derive(Debug, Clone, Copy)]
pub struct SummaryFields<'a> {
    pub timeframe: Timeframe,
    pub record_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    pub analysis: &'a str,
}

/// Render the report summary: timeframe, record count, average (1 dp),
/// range (1 dp), variance (2 dp), then the classifier's sentence.
pub fn render_summary(fields: &SummaryFields<'_>) -> String {
    format!(
        "Timeframe: {}\nRecords: {}\nAverage: {:.1}\nRange: {:.1} - {:.1}\nVariance: {:.2}\n{}",
        fields.timeframe.label(),
        fields.record_count,
        fields.mean,
        fields.min,
        fields.max,
        fields.variance,
        fields.analysis,
    )
}
