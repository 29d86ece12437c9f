//! JSON output formatting for dincharya.
//!
//! This module provides functions for formatting events and expenses as JSON.
//! Date-times are ISO 8601 strings; an absent note is `null`.

use serde::Serialize;
use serde_json::json;

use crate::error::DincharyaError;
use crate::features::expense::{Expense, MonthlyTotals};
use crate::features::nlp::ParsedEvent;
use crate::features::schedule::ScheduleEntry;

/// Format a parsed (not stored) event as JSON
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_parsed_event_json(event: &ParsedEvent) -> Result<String, DincharyaError> {
    let output = json!({
        "parsed": true,
        "title": event.title,
        "datetime": event.datetime_iso(),
        "note": event.note,
    });
    to_json(&output)
}

/// Format a stored schedule entry as JSON
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_schedule_entry_json(entry: &ScheduleEntry) -> Result<String, DincharyaError> {
    to_json(entry)
}

/// Format schedule entries as JSON
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_schedule_json(entries: &[ScheduleEntry]) -> Result<String, DincharyaError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    to_json(&output)
}

/// Format a stored expense as JSON
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_expense_json(expense: &Expense) -> Result<String, DincharyaError> {
    to_json(expense)
}

/// Format monthly totals as JSON
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_monthly_totals_json(totals: &MonthlyTotals) -> Result<String, DincharyaError> {
    to_json(totals)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DincharyaError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn make_entry(title: &str, note: Option<&str>) -> ScheduleEntry {
        ScheduleEntry {
            id: 7,
            user_id: "demo".to_string(),
            title: title.to_string(),
            datetime: at(2024, 1, 11, 13, 0),
            note: note.map(String::from),
            created_at: at(2024, 1, 10, 9, 0),
        }
    }

    #[test]
    fn test_format_parsed_event_json() {
        let event = ParsedEvent {
            title: "lunch".to_string(),
            datetime: at(2024, 1, 11, 13, 0),
            note: None,
        };
        let result = format_parsed_event_json(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["parsed"], true);
        assert_eq!(value["title"], "lunch");
        assert_eq!(value["datetime"], "2024-01-11T13:00:00");
        assert!(value["note"].is_null());
    }

    #[test]
    fn test_format_schedule_entry_json() {
        let entry = make_entry("lunch", Some("With Raj"));
        let result = format_schedule_entry_json(&entry).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["datetime"], "2024-01-11T13:00:00");
        assert_eq!(value["note"], "With Raj");
    }

    #[test]
    fn test_format_schedule_json() {
        let entries = vec![make_entry("lunch", None), make_entry("dinner", None)];
        let result = format_schedule_json(&entries).unwrap();

        assert!(result.contains("\"count\": 2"));
        assert!(result.contains("\"title\": \"dinner\""));
    }

    #[test]
    fn test_format_schedule_json_empty() {
        let result = format_schedule_json(&[]).unwrap();
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_monthly_totals_json() {
        let mut totals = MonthlyTotals::empty(2024, 1);
        totals.record("company", 1000.0, "company");
        totals.record("food", 300.0, "company");

        let result = format_monthly_totals_json(&totals).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["personal"], 300.0);
        assert_eq!(value["company"], 1000.0);
        assert_eq!(value["total"], 1300.0);
    }

    #[test]
    fn test_format_expense_json() {
        let expense = Expense {
            id: 1,
            user_id: "demo".to_string(),
            amount: 250.5,
            category: "food".to_string(),
            note: None,
            image_url: None,
            created_at: at(2024, 1, 10, 9, 0),
        };
        let result = format_expense_json(&expense).unwrap();
        assert!(result.contains("\"amount\": 250.5"));
        assert!(result.contains("\"image_url\": null"));
    }
}
