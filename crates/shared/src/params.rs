//! Query parameter helpers.
//!
//! The platform API passes multi-value filters as comma-delimited strings and
//! treats a missing or blank parameter as "no constraint". These helpers
//! normalize raw parameter values before they reach the query engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Returns the trimmed value, or `None` if it is absent or blank.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Splits a comma-delimited list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an optional comma-delimited list.
///
/// Returns `None` when the parameter is absent or contains no non-empty entries.
pub fn parse_list(value: Option<&str>) -> Option<Vec<String>> {
    let entries = split_list(non_empty(value)?);
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses a `HH:MM` or `HH:MM:SS` time.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Which end of a day a date-only bound refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Combines a date and optional time parameter into a timestamp.
///
/// A missing or unparseable time falls back to the start or end of the day.
/// Returns `None` if the date is absent or unparseable.
pub fn combine_date_time(
    date: Option<&str>,
    time: Option<&str>,
    bound: DayBound,
) -> Option<NaiveDateTime> {
    let date = parse_date(non_empty(date)?)?;
    let time = non_empty(time).and_then(parse_time).unwrap_or(match bound {
        DayBound::Start => NaiveTime::MIN,
        DayBound::End => NaiveTime::from_hms_opt(23, 59, 59)?,
    });
    Some(date.and_time(time))
}
