//! Natural language event parser.
//!
//! Parses phrases like "lunch tomorrow at 1pm with Raj" or "kal 6 baje milna"
//! into a title, an absolute date-time and an optional note.
//!
//! The parser never reads the system clock: every relative expression is
//! resolved against the reference instant supplied by the caller.

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Timelike, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::core::format_iso;

/// A stripped title shorter than this falls back to the raw input.
const MIN_TITLE_CHARS: usize = 3;

/// Upper bound on a title taken from the raw input.
const MAX_FALLBACK_TITLE_CHARS: usize = 100;

/// Title used when the input has no text at all.
pub const UNTITLED_EVENT: &str = "Untitled event";

/// Result of parsing a natural language event phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    /// The phrase with time and date fragments removed.
    pub title: String,
    /// Resolved date and time of the event.
    pub datetime: NaiveDateTime,
    /// Person and topic details ("With Raj, Topic: budget").
    pub note: Option<String>,
}

impl ParsedEvent {
    /// Get the event date-time as an ISO 8601 string.
    #[must_use]
    pub fn datetime_iso(&self) -> String {
        format_iso(self.datetime)
    }
}

/// Meridiem token attached to an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Ante meridiem ("am").
    Am,
    /// Post meridiem ("pm").
    Pm,
}

impl Meridiem {
    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if token.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }
}

// Time-of-day patterns in priority order; the first one that matches wins.
static TIME_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // "at 6", "at 6:30", "at 1030", "at 6 pm"
        r"(?i)at (?P<hour>[0-9]{1,2}):?(?P<minute>[0-9]{2})?\s*(?P<meridiem>am|pm)?",
        // "18:30", "6:30pm"
        r"(?i)(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2})\s*(?P<meridiem>am|pm)?",
        // "6pm", "6 am"
        r"(?i)(?P<hour>[0-9]{1,2})\s*(?P<meridiem>am|pm)",
        // "6 baje"
        r"(?i)(?P<hour>[0-9]{1,2})\s*baje",
    ]
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("Invalid time regex {p}: {e}")))
});

// Fragments removed from the title. Every occurrence is stripped, whether or
// not it decided the time.
static TITLE_STRIP_PATTERNS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        r"(?i)at [0-9]{1,2}:?[0-9]{0,2}\s*(?:am|pm)?",
        r"(?i)[0-9]{1,2}:[0-9]{2}\s*(?:am|pm)?",
        r"(?i)[0-9]{1,2}\s*(?:am|pm|baje)",
        r"(?i)tomorrow|kal|today|aaj",
        r"(?i)next \w+",
    ]
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("Invalid title regex {p}: {e}")))
});

static NEXT_WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)next (monday|tuesday|wednesday|thursday|friday|saturday|sunday)")
        .unwrap_or_else(|e| panic!("Invalid weekday regex: {e}"))
});

static PERSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "with Raj" or Hindi "ke sath Raj"
    Regex::new(r"(?i)(?:with|ke sath)\s+(\w+)")
        .unwrap_or_else(|e| panic!("Invalid person regex: {e}"))
});

static TOPIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "topic budget" or Hindi "vishay budget"
    Regex::new(r"(?i)(?:topic|vishay)\s+(\w+)")
        .unwrap_or_else(|e| panic!("Invalid topic regex: {e}"))
});

/// Parse a natural language event phrase.
///
/// Never fails: input without a recognizable time keeps the reference
/// time of day, input without a date keyword stays on the reference date, and
/// a date-time that cannot be built falls back to `reference` itself.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dincharya::features::nlp::parse_event;
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 10)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// let event = parse_event("lunch tomorrow at 1pm with Raj", now);
/// assert_eq!(event.title, "lunch with Raj");
/// assert_eq!(event.datetime_iso(), "2024-01-11T13:00:00");
/// assert_eq!(event.note.as_deref(), Some("With Raj"));
/// ```
#[must_use]
pub fn parse_event(text: &str, reference: NaiveDateTime) -> ParsedEvent {
    debug!(text, "parsing event phrase");

    let lower = text.to_lowercase();
    let (hour, minute) =
        extract_time(text).unwrap_or_else(|| (reference.hour(), reference.minute()));
    let offset = day_offset(&lower, reference.weekday());

    let datetime = resolve_datetime(reference, hour, minute, offset).unwrap_or_else(|| {
        warn!(text, hour, minute, offset, "invalid event date-time, using reference instant");
        reference
    });

    let event = ParsedEvent {
        title: extract_title(text),
        datetime,
        note: extract_note(text),
    };

    debug!(
        title = %event.title,
        datetime = %event.datetime_iso(),
        note = ?event.note,
        "parsed event phrase"
    );

    event
}

/// Extract hour and minute from the first matching time pattern.
fn extract_time(text: &str) -> Option<(u32, u32)> {
    let caps = TIME_PATTERNS.iter().find_map(|p| p.captures(text))?;

    let hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
    let minute: u32 = match caps.name("minute") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = caps
        .name("meridiem")
        .and_then(|m| Meridiem::from_token(m.as_str()));

    Some((apply_meridiem(hour, meridiem), minute))
}

/// Map a stated hour onto the 24-hour clock.
///
/// Without a meridiem token, hours 1 through 7 are read as evening
/// ("6 baje" is 18:00). Every other hour is kept as stated.
#[must_use]
pub fn apply_meridiem(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(_) => hour,
        None if (1..=7).contains(&hour) => hour + 12,
        None => hour,
    }
}

/// Number of days to add to the reference date.
///
/// Only the first matching keyword counts: tomorrow/kal, then next week,
/// then next <weekday>.
fn day_offset(lower: &str, today: Weekday) -> u64 {
    if lower.contains("tomorrow") || lower.contains("kal") {
        return 1;
    }

    if lower.contains("next week") {
        return 7;
    }

    NEXT_WEEKDAY_PATTERN
        .captures(lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| weekday_from_name(m.as_str()))
        .map_or(0, |target| days_until_next(today, target))
}

/// Days from `today` until the next `target`, always between 1 and 7.
///
/// Asking for today's own weekday jumps a full week.
#[must_use]
pub fn days_until_next(today: Weekday, target: Weekday) -> u64 {
    let diff = i64::from(target.num_days_from_sunday()) - i64::from(today.num_days_from_sunday());
    let diff = if diff <= 0 { diff + 7 } else { diff };
    diff.unsigned_abs()
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Combine the reference date, the day offset and the resolved time.
fn resolve_datetime(
    reference: NaiveDateTime,
    hour: u32,
    minute: u32,
    offset: u64,
) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let date = reference.date().checked_add_days(Days::new(offset))?;
    Some(date.and_time(time))
}

/// Strip time and date fragments to get the title.
fn extract_title(text: &str) -> String {
    let stripped = TITLE_STRIP_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, p| p.replace_all(&acc, "").into_owned());
    let title = clean_title(&stripped);

    if title.chars().count() >= MIN_TITLE_CHARS {
        return title;
    }

    let fallback: String = text.chars().take(MAX_FALLBACK_TITLE_CHARS).collect();
    if fallback.trim().is_empty() {
        UNTITLED_EVENT.to_string()
    } else {
        fallback
    }
}

/// Collapse runs of whitespace.
fn clean_title(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn extract_note(text: &str) -> Option<String> {
    let person = PERSON_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let topic = TOPIC_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match (person, topic) {
        (Some(person), Some(topic)) => Some(format!("With {person}, Topic: {topic}")),
        (Some(person), None) => Some(format!("With {person}")),
        (None, Some(topic)) => Some(format!("Topic: {topic}")),
        (None, None) => None,
    }
}
