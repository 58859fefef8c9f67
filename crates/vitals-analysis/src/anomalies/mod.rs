//! Anomaly detection: deviation from the global distribution of a series.
//!
//! deviation score = |value - mean| / stdDev (0 when stdDev is 0).
//! Severity by the highest threshold met:
//! - ≥ 3.0 → critical
//! - ≥ 2.5 → high
//! - ≥ 2.0 → medium
//! - ≥ 1.5 → low
//! Scores below 1.5 are not anomalous.

pub mod detector;
pub mod types;

pub use detector::{detect, detect_with_context};
pub use types::{AnomalyPoint, AnomalySeverity};
