//! Health measurements as supplied by the acquisition layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of health metric a measurement records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Weight,
    Steps,
    Calories,
    HeartRate,
    BloodGlucose,
}

impl DataType {
    pub const ALL: [DataType; 5] = [
        Self::Weight,
        Self::Steps,
        Self::Calories,
        Self::HeartRate,
        Self::BloodGlucose,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Steps => "steps",
            Self::Calories => "calories",
            Self::HeartRate => "heart_rate",
            Self::BloodGlucose => "blood_glucose",
        }
    }

    /// Human-readable name for report text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Steps => "Steps",
            Self::Calories => "Calories",
            Self::HeartRate => "Heart Rate",
            Self::BloodGlucose => "Blood Glucose",
        }
    }

    /// Unit used when the caller does not supply one.
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Steps => "steps",
            Self::Calories => "kcal",
            Self::HeartRate => "bpm",
            Self::BloodGlucose => "mg/dL",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Accepts the snake_case name, its compact form, or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|dt| {
                dt.name() == key
                    || dt.name().replace('_', "") == key
                    || dt.display_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("unknown data type: {s}"))
    }
}

/// A single timestamped health reading. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub data_type: DataType,
    pub unit: String,
}

impl Measurement {
    /// Create a measurement with the data type's default unit.
    pub fn new(timestamp: DateTime<Utc>, value: f64, data_type: DataType) -> Self {
        Self {
            timestamp,
            value,
            data_type,
            unit: data_type.default_unit().to_string(),
        }
    }

    /// Override the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}
