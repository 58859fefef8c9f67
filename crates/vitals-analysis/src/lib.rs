//! # vitals-analysis
//!
//! Trend analysis engine for health measurements.
//!
//! Pipeline: normalize → statistics → trend classification →
//! moving average + anomaly detection → report assembly.
//! Every operation is a pure function of its input; nothing is cached
//! between calls.

pub mod aggregation;
pub mod anomalies;
pub mod engine;
pub mod normalize;
pub mod prediction;
pub mod report;
pub mod stats;
pub mod trend;

pub use aggregation::MovingAveragePoint;
pub use anomalies::{AnomalyPoint, AnomalySeverity};
pub use engine::{TrendEngine, TrendParams};
pub use prediction::TrendPrediction;
pub use report::{AnalysisReport, TrendAnalysis};
pub use stats::{Regression, TrendSummary};
pub use trend::{ClassifierParams, TrendClassifier, TrendDirection, TrendPoint, TrendResult};
