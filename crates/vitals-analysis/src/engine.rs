//! [`TrendEngine`]: façade over the analysis pipeline.
//!
//! Holds only resolved parameters. Every call works on its own input and
//! returns a fresh report; no series data outlives a call.

use chrono::{DateTime, Utc};

use vitals_core::config::VitalsConfig;
use vitals_core::constants;
use vitals_core::errors::{AnalysisResult, TrendError};
use vitals_core::types::{DataType, Measurement, Timeframe};

use crate::aggregation::moving_average::{self, MovingAveragePoint};
use crate::anomalies::{self, detector, AnomalyPoint};
use crate::normalize;
use crate::prediction::{self, TrendPrediction};
use crate::report::{self, AnalysisReport, TrendAnalysis};
use crate::stats::{self, TrendSummary};
use crate::trend::{ClassifierParams, TrendClassifier, TrendResult};

/// Resolved engine parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendParams {
    pub classifier: ClassifierParams,
    /// Overrides each timeframe's default moving-average window.
    pub moving_average_window: Option<usize>,
    /// Cap on prediction steps.
    pub max_horizon_days: u32,
}

impl TrendParams {
    pub fn from_config(config: &VitalsConfig) -> Self {
        Self {
            classifier: ClassifierParams::from_config(&config.trend),
            moving_average_window: config.trend.moving_average_window,
            max_horizon_days: config.prediction.effective_max_horizon_days(),
        }
    }

    /// Moving-average period for `timeframe`.
    pub fn window_for(&self, timeframe: Timeframe) -> usize {
        self.moving_average_window
            .unwrap_or_else(|| timeframe.default_window())
    }
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            classifier: ClassifierParams::default(),
            moving_average_window: None,
            max_horizon_days: constants::DEFAULT_MAX_HORIZON_DAYS,
        }
    }
}

/// The trend analysis engine.
#[derive(Debug, Clone, Default)]
pub struct TrendEngine {
    params: TrendParams,
    classifier: TrendClassifier,
}

impl TrendEngine {
    /// Create an engine with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from explicit parameters.
    pub fn with_params(params: TrendParams) -> Self {
        Self {
            params,
            classifier: TrendClassifier::new(params.classifier),
        }
    }

    /// Create an engine from a validated configuration.
    pub fn from_config(config: &VitalsConfig) -> Self {
        Self::with_params(TrendParams::from_config(config))
    }

    pub fn params(&self) -> &TrendParams {
        &self.params
    }

    /// Classify the direction of an unordered record set.
    pub fn classify_trend(
        &self,
        records: &[Measurement],
        timeframe: Timeframe,
    ) -> AnalysisResult<TrendResult> {
        let _span = vitals_core::trend_span!(timeframe, records.len()).entered();
        self.classifier.classify(records, timeframe)
    }

    /// Moving average with an explicit period, ascending by timestamp.
    pub fn calculate_moving_average(
        &self,
        records: &[Measurement],
        period: usize,
    ) -> AnalysisResult<Vec<MovingAveragePoint>> {
        let _span = vitals_core::moving_average_span!(period, records.len()).entered();
        moving_average::moving_average(records, period)
    }

    /// Anomalies against the global distribution.
    pub fn detect_anomalies(&self, records: &[Measurement]) -> AnalysisResult<Vec<AnomalyPoint>> {
        let _span = vitals_core::anomalies_span!(records.len()).entered();
        anomalies::detect(records)
    }

    /// Descriptive summary of the chronological series.
    pub fn summarize(&self, records: &[Measurement]) -> AnalysisResult<TrendSummary> {
        let ascending = normalize::sort_chronological(records)?;
        stats::summarize(&normalize::values(&ascending))
    }

    /// Report using the configured or timeframe-default moving-average window.
    pub fn generate_analysis_report(
        &self,
        records: &[Measurement],
        timeframe: Timeframe,
    ) -> AnalysisResult<AnalysisReport> {
        self.generate_analysis_report_with_period(records, timeframe, self.params.window_for(timeframe))
    }

    /// Report with an explicit moving-average period.
    pub fn generate_analysis_report_with_period(
        &self,
        records: &[Measurement],
        timeframe: Timeframe,
        period: usize,
    ) -> AnalysisResult<AnalysisReport> {
        report::generate_analysis_report(records, timeframe, period, &self.classifier)
    }

    /// Full analysis of one data type over `timeframe` ending at `as_of`.
    ///
    /// Records of other types or outside the window are ignored. Trend points
    /// carry the moving average when enough samples exist; anomalies use the
    /// local moving average as their expected value.
    pub fn analyze_trend(
        &self,
        records: &[Measurement],
        data_type: DataType,
        timeframe: Timeframe,
        as_of: DateTime<Utc>,
    ) -> AnalysisResult<TrendAnalysis> {
        let _span = vitals_core::trend_span!(timeframe, records.len()).entered();

        let time_range = timeframe.range_ending_at(as_of);
        let ascending = normalize::select(records, data_type, &time_range)?;
        if ascending.len() < 2 {
            return Err(TrendError::insufficient(2, ascending.len()));
        }
        let values = normalize::values(&ascending);

        let (trend, regression) = self.classifier.classify_with_regression(&values, timeframe)?;
        let summary = stats::summarize(&values)?;

        let period = self.params.window_for(timeframe);
        let window_averages = if period > 0 && ascending.len() >= period {
            Some(moving_average::over_sorted(&ascending, period))
        } else {
            None
        };
        let local = window_averages
            .as_deref()
            .map(|ma| moving_average::aligned(ascending.len(), ma))
            .unwrap_or_default();

        let scored = detector::score_sorted(&ascending, &local)?;
        let anomalous: Vec<usize> = scored.iter().map(|(i, _)| *i).collect();
        let anomalies: Vec<AnomalyPoint> = scored.into_iter().map(|(_, a)| a).collect();
        let trend_points =
            report::build_trend_points(&ascending, window_averages.as_deref(), &anomalous);

        tracing::debug!(
            data_type = %data_type,
            records = ascending.len(),
            direction = %trend.direction,
            anomalies = anomalies.len(),
            "trend analysis complete"
        );

        Ok(TrendAnalysis {
            data_type,
            time_range,
            trend_points,
            direction: trend.direction,
            slope: regression.slope,
            correlation: regression.correlation,
            anomalies,
            summary,
            confidence: trend.confidence,
        })
    }

    /// Bounded linear extrapolation `horizon_days` steps ahead.
    pub fn predict_trend(
        &self,
        records: &[Measurement],
        data_type: DataType,
        horizon_days: u32,
    ) -> AnalysisResult<TrendPrediction> {
        let _span = vitals_core::prediction_span!(data_type, horizon_days).entered();
        prediction::predict(records, data_type, horizon_days, self.params.max_horizon_days)
    }
}
