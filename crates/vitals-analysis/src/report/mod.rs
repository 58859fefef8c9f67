//! Report assembly: trend points, classification, moving average, and text summary.

pub mod builder;
pub mod text;
pub mod types;

pub use builder::{build_trend_points, generate_analysis_report};
pub use types::{AnalysisReport, TrendAnalysis};
