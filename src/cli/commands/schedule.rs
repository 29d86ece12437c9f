//! Schedule command implementations.
//!
//! This module implements `dincharya schedule add|list|parse`.

use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::DincharyaError;
use crate::features::nlp::{parse_event, ParsedEvent};
use crate::features::schedule::{ScheduleRequest, ScheduleStorage};
use crate::identity::UserId;
use crate::output::{format_parsed_event, format_schedule, format_schedule_entry};

/// Execute the schedule add command.
///
/// # Errors
///
/// Returns an error if the request is incomplete or the entry cannot be stored.
pub fn schedule_add(
    storage: &ScheduleStorage,
    user: &UserId,
    request: ScheduleRequest,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    let now = clock.now();
    let entry = request.resolve(now)?;
    let stored = storage.add(user, &entry, now)?;
    format_schedule_entry(&stored, format)
}

/// Show what `schedule add` would store, without storing it.
///
/// # Errors
///
/// Returns an error if the request is incomplete or output formatting fails.
pub fn schedule_preview(
    request: ScheduleRequest,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    let entry = request.resolve(clock.now())?;
    let event = ParsedEvent {
        title: entry.title,
        datetime: entry.datetime,
        note: entry.note,
    };
    format_parsed_event(&event, format)
}

/// Execute the schedule list command.
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn schedule_list(
    storage: &ScheduleStorage,
    user: &UserId,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    let entries = storage.list(user)?;
    format_schedule(&entries, format)
}

/// Execute the schedule parse command.
///
/// # Errors
///
/// Returns an error if the text is blank or output formatting fails.
pub fn schedule_parse(
    text: &str,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    if text.trim().is_empty() {
        return Err(DincharyaError::InvalidInput("text required".to_string()));
    }
    let event = parse_event(text, clock.now());
    format_parsed_event(&event, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::storage::Database;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    fn text_request(text: &str) -> ScheduleRequest {
        ScheduleRequest {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_schedule_add_and_list() {
        let storage = ScheduleStorage::with_database(Database::open_in_memory().unwrap());
        let user = UserId::demo();

        let added = schedule_add(
            &storage,
            &user,
            text_request("lunch tomorrow at 1pm with Raj"),
            &clock(),
            OutputFormat::Json,
        )
        .unwrap();
        assert!(added.contains("\"datetime\": \"2024-01-11T13:00:00\""));
        assert!(added.contains("\"note\": \"With Raj\""));

        let listed = schedule_list(&storage, &user, OutputFormat::Json).unwrap();
        assert!(listed.contains("\"count\": 1"));
        assert!(listed.contains("\"title\": \"lunch with Raj\""));
    }

    #[test]
    fn test_schedule_add_fallback_prints_what_list_shows() {
        let storage = ScheduleStorage::with_database(Database::open_in_memory().unwrap());
        let user = UserId::demo();
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_nano_opt(9, 5, 42, 123_456_789)
                .unwrap(),
        );

        let added =
            schedule_add(&storage, &user, text_request("call at 99"), &clock, OutputFormat::Json)
                .unwrap();
        assert!(added.contains("\"datetime\": \"2024-01-10T09:05:42\""));
        assert!(added.contains("\"created_at\": \"2024-01-10T09:05:42\""));

        let listed = schedule_list(&storage, &user, OutputFormat::Json).unwrap();
        let listed: serde_json::Value = serde_json::from_str(&listed).unwrap();
        let added: serde_json::Value = serde_json::from_str(&added).unwrap();
        assert_eq!(listed["items"][0], added);
    }

    #[test]
    fn test_schedule_add_incomplete_request() {
        let storage = ScheduleStorage::with_database(Database::open_in_memory().unwrap());
        let request = ScheduleRequest {
            title: Some("Call".to_string()),
            ..Default::default()
        };
        let err = schedule_add(&storage, &UserId::demo(), request, &clock(), OutputFormat::Json)
            .unwrap_err();
        assert!(matches!(err, DincharyaError::InvalidInput(_)));
        assert!(storage.list(&UserId::demo()).unwrap().is_empty());
    }

    #[test]
    fn test_schedule_preview() {
        let result =
            schedule_preview(text_request("kal milna hai"), &clock(), OutputFormat::Json).unwrap();
        assert!(result.contains("\"parsed\": true"));
        assert!(result.contains("\"datetime\": \"2024-01-11T09:00:00\""));
    }

    #[test]
    fn test_schedule_parse() {
        let result = schedule_parse("call at 6", &clock(), OutputFormat::Json).unwrap();
        assert!(result.contains("\"datetime\": \"2024-01-10T18:00:00\""));
        assert!(result.contains("\"note\": null"));
    }

    #[test]
    fn test_schedule_parse_blank_text() {
        let err = schedule_parse("  ", &clock(), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, DincharyaError::InvalidInput(_)));
    }
}
