//! Date and time utilities.
//!
//! Helpers shared by the schedule and expense commands: parsing explicit
//! date-time arguments, ISO formatting and calendar month ranges.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Format used for stored and displayed date-times.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats accepted for explicit date-time arguments, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Convert a date-time to an ISO 8601 string without offset.
#[must_use]
pub fn format_iso(datetime: NaiveDateTime) -> String {
    datetime.format(ISO_FORMAT).to_string()
}

/// Drop sub-second precision, matching what [`ISO_FORMAT`] can store.
#[must_use]
pub fn truncate_to_seconds(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime.with_nanosecond(0).unwrap_or(datetime)
}

/// Parse an explicit date-time argument.
///
/// Supports:
/// - `2024-01-10T18:30`, `2024-01-10T18:30:00`
/// - `2024-01-10 18:30`, `2024-01-10 18:30:00`
/// - `2024-01-10` (midnight)
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_datetime_arg(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Half-open range `[start, end)` covering a calendar month.
///
/// Returns `None` if the month is outside 1-12 or the year is out of range.
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start.and_hms_opt(0, 0, 0)?, end.and_hms_opt(0, 0, 0)?))
}
