//! Timeframe enumeration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use vitals_core::errors::TrendError;
use vitals_core::types::Timeframe;

#[test]
fn spans_and_windows_match_the_closed_set() {
    let table: Vec<(u32, usize, &str)> = Timeframe::ALL
        .iter()
        .map(|tf| (tf.days(), tf.default_window(), tf.label()))
        .collect();
    assert_eq!(
        table,
        vec![
            (7, 3, "week"),
            (30, 7, "month"),
            (90, 14, "quarter"),
            (365, 30, "year"),
        ]
    );
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("Week".parse::<Timeframe>().unwrap(), Timeframe::Week);
    assert_eq!(" QUARTER ".parse::<Timeframe>().unwrap(), Timeframe::Quarter);
}

#[test]
fn unknown_timeframe_is_rejected() {
    let err = "fortnight".parse::<Timeframe>().unwrap_err();
    assert_eq!(err, TrendError::InvalidTimeframe("fortnight".to_string()));
}

#[test]
fn range_ending_at_is_inclusive() {
    let as_of = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let range = Timeframe::Week.range_ending_at(as_of);
    assert_eq!(range.duration(), Duration::days(7));
    assert!(range.contains(as_of));
    assert!(range.contains(as_of - Duration::days(7)));
    assert!(!range.contains(as_of - Duration::days(7) - Duration::seconds(1)));
    assert!(!range.contains(as_of + Duration::seconds(1)));
}

#[test]
fn serializes_in_snake_case() {
    let json = serde_json::to_string(&Timeframe::Quarter).unwrap();
    assert_eq!(json, "\"quarter\"");
}

#[test]
fn range_start_saturates_at_earliest_instant() {
    let as_of = DateTime::<Utc>::MIN_UTC + Duration::days(3);
    let range = Timeframe::Year.range_ending_at(as_of);
    assert_eq!(range.start, DateTime::<Utc>::MIN_UTC);
    assert_eq!(range.end, as_of);
    assert!(range.contains(DateTime::<Utc>::MIN_UTC));
}
