//! Core types for trend classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitals_core::constants::{QUALITATIVE_MODERATE, QUALITATIVE_STRONG};

/// Overall movement of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
    /// Direction flips too often for the slope to be meaningful.
    Volatile,
}

impl TrendDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::Volatile => "volatile",
        }
    }

    /// Capitalized name for sentence starts.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
            Self::Volatile => "Volatile",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative bucket for strength and confidence scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualitative {
    /// score < 0.5
    Weak,
    /// 0.5 ≤ score < 0.8
    Moderate,
    /// score ≥ 0.8
    Strong,
}

impl Qualitative {
    pub fn from_score(score: f64) -> Self {
        if score >= QUALITATIVE_STRONG {
            Self::Strong
        } else if score >= QUALITATIVE_MODERATE {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for Qualitative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classified trend of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// |correlation| in [0.0, 1.0].
    pub strength: f64,
    /// r² in [0.0, 1.0].
    pub confidence: f64,
    /// Fitted change per sample.
    pub slope: f64,
    /// One-sentence description.
    pub analysis: String,
}

impl TrendResult {
    pub fn strength_bucket(&self) -> Qualitative {
        Qualitative::from_score(self.strength)
    }

    pub fn confidence_bucket(&self) -> Qualitative {
        Qualitative::from_score(self.confidence)
    }
}

/// One visualized sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Moving average of the window ending at this sample, when one exists.
    pub moving_average: Option<f64>,
    pub is_anomaly: bool,
}
