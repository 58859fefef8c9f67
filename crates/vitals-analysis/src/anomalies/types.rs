//! Core types for anomaly detection.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitals_core::constants::{SEVERITY_CRITICAL, SEVERITY_HIGH, SEVERITY_LOW, SEVERITY_MEDIUM};

/// A sample flagged as anomalous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Series mean, or the local moving average when one is available.
    pub expected_value: f64,
    /// Standard deviations from the series mean.
    pub deviation_score: f64,
    pub severity: AnomalySeverity,
}

/// Severity tiers, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnomalySeverity {
    /// Classify a deviation score; `None` when the score is not anomalous.
    pub fn from_score(score: f64) -> Option<Self> {
        if score >= SEVERITY_CRITICAL {
            Some(Self::Critical)
        } else if score >= SEVERITY_HIGH {
            Some(Self::High)
        } else if score >= SEVERITY_MEDIUM {
            Some(Self::Medium)
        } else if score >= SEVERITY_LOW {
            Some(Self::Low)
        } else {
            None
        }
    }

    /// Minimum deviation score for this tier.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Low => SEVERITY_LOW,
            Self::Medium => SEVERITY_MEDIUM,
            Self::High => SEVERITY_HIGH,
            Self::Critical => SEVERITY_CRITICAL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
