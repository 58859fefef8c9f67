//! Supported analysis windows.
//!
//! The set is closed: week, month, quarter, year. Each carries a day span
//! and the moving-average window used when the caller does not override it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TrendError;

/// Named analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Day span of the window.
    pub fn days(&self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Default moving-average period.
    pub fn default_window(&self) -> usize {
        match self {
            Self::Week => 3,
            Self::Month => 7,
            Self::Quarter => 14,
            Self::Year => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days()))
    }

    /// The inclusive range covering this timeframe and ending at `as_of`.
    /// The start saturates at the earliest representable instant.
    pub fn range_ending_at(&self, as_of: DateTime<Utc>) -> DateRange {
        DateRange {
            start: as_of
                .checked_sub_signed(self.duration())
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            end: as_of,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tf| tf.label() == key)
            .ok_or_else(|| TrendError::InvalidTimeframe(s.to_string()))
    }
}

/// Inclusive time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}
