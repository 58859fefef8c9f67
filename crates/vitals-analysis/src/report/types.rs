//! Report records handed to presentation layers.

use serde::{Deserialize, Serialize};

use vitals_core::types::{DataType, DateRange, Timeframe};

use crate::aggregation::MovingAveragePoint;
use crate::anomalies::AnomalyPoint;
use crate::stats::TrendSummary;
use crate::trend::{TrendDirection, TrendPoint, TrendResult};

/// Trend analysis of one data type over one time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub data_type: DataType,
    pub time_range: DateRange,
    pub trend_points: Vec<TrendPoint>,
    pub direction: TrendDirection,
    pub slope: f64,
    /// Pearson correlation in [-1.0, 1.0].
    pub correlation: f64,
    pub anomalies: Vec<AnomalyPoint>,
    pub summary: TrendSummary,
    /// r² in [0.0, 1.0].
    pub confidence: f64,
}

/// Extended report for a timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timeframe: Timeframe,
    pub record_count: usize,
    pub trend: TrendResult,
    pub trend_points: Vec<TrendPoint>,
    /// Period used for the moving average.
    pub moving_average_period: usize,
    /// `None` when there are fewer records than the period.
    pub moving_average: Option<Vec<MovingAveragePoint>>,
    /// Population variance of the values.
    pub variance: f64,
    /// Multi-line human-readable summary.
    pub summary: String,
}
