//! Schedule entry types.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::{format_iso, parse_datetime_arg};
use crate::error::DincharyaError;
use crate::features::nlp::{parse_event, ParsedEvent};

/// A stored schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Row id.
    pub id: i64,
    /// Owning user.
    pub user_id: String,
    /// Event title.
    pub title: String,
    /// When the event happens.
    pub datetime: NaiveDateTime,
    /// Optional details.
    pub note: Option<String>,
    /// When the entry was recorded.
    pub created_at: NaiveDateTime,
}

impl ScheduleEntry {
    /// Get the event date-time as an ISO 8601 string.
    #[must_use]
    pub fn datetime_iso(&self) -> String {
        format_iso(self.datetime)
    }
}

/// A schedule entry ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleEntry {
    /// Event title.
    pub title: String,
    /// When the event happens.
    pub datetime: NaiveDateTime,
    /// Optional details.
    pub note: Option<String>,
}

impl From<ParsedEvent> for NewScheduleEntry {
    fn from(event: ParsedEvent) -> Self {
        Self {
            title: event.title,
            datetime: event.datetime,
            note: event.note,
        }
    }
}

/// Raw input for adding a schedule entry.
///
/// Either `text` alone (parsed as natural language) or both `title` and
/// `datetime` must be given.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Natural language phrase.
    pub text: Option<String>,
    /// Explicit title.
    pub title: Option<String>,
    /// Explicit date-time (`YYYY-MM-DDTHH:MM`).
    pub datetime: Option<String>,
    /// Explicit note. Replaces any note found in `text`.
    pub note: Option<String>,
}

impl ScheduleRequest {
    /// Turn the request into an entry, resolving relative phrases against
    /// `reference`.
    ///
    /// # Errors
    ///
    /// Returns `DincharyaError::InvalidInput` if neither a phrase nor a
    /// complete title/date-time pair is given, or the date-time is malformed.
    pub fn resolve(self, reference: NaiveDateTime) -> Result<NewScheduleEntry, DincharyaError> {
        let text = non_blank(self.text);
        let title = non_blank(self.title);
        let datetime = non_blank(self.datetime);
        let note = non_blank(self.note);

        match (text, title, datetime) {
            (Some(text), None, None) => {
                let mut entry = NewScheduleEntry::from(parse_event(&text, reference));
                if note.is_some() {
                    entry.note = note;
                }
                Ok(entry)
            }
            (_, Some(title), Some(datetime)) => {
                let datetime = parse_datetime_arg(&datetime).ok_or_else(|| {
                    DincharyaError::InvalidInput(format!(
                        "Invalid datetime '{datetime}' (expected YYYY-MM-DDTHH:MM)"
                    ))
                })?;
                Ok(NewScheduleEntry {
                    title,
                    datetime,
                    note,
                })
            }
            _ => Err(DincharyaError::InvalidInput(
                "title and datetime required (or provide text for natural language)".to_string(),
            )),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
