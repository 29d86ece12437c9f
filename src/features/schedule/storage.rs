//! Schedule entry storage.
//!
//! Persists schedule entries to the local database.

use chrono::NaiveDateTime;
use rusqlite::{params, Row};

use super::entry::{NewScheduleEntry, ScheduleEntry};
use crate::core::{format_iso, truncate_to_seconds};
use crate::error::DincharyaError;
use crate::identity::UserId;
use crate::storage::{datetime_column, Database};

/// Storage for schedule entries.
pub struct ScheduleStorage {
    db: Database,
}

impl ScheduleStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Store a new entry for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(
        &self,
        user: &UserId,
        entry: &NewScheduleEntry,
        created_at: NaiveDateTime,
    ) -> Result<ScheduleEntry, DincharyaError> {
        let datetime = truncate_to_seconds(entry.datetime);
        let created_at = truncate_to_seconds(created_at);
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO schedule_entries (user_id, title, datetime, note, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.as_str(),
                entry.title,
                format_iso(datetime),
                entry.note,
                format_iso(created_at),
            ],
        )
        .map_err(|e| DincharyaError::Database(format!("Failed to insert schedule entry: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, user = %user, "added schedule entry");

        Ok(ScheduleEntry {
            id,
            user_id: user.as_str().to_string(),
            title: entry.title.clone(),
            datetime,
            note: entry.note.clone(),
            created_at,
        })
    }

    /// List every entry for `user`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, user: &UserId) -> Result<Vec<ScheduleEntry>, DincharyaError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, user_id, title, datetime, note, created_at
                  FROM schedule_entries
                  WHERE user_id = ?1
                  ORDER BY datetime ASC, id ASC",
            )
            .map_err(|e| DincharyaError::Database(format!("Failed to prepare query: {e}")))?;

        let entries = stmt
            .query_map(params![user.as_str()], row_to_entry)
            .map_err(|e| DincharyaError::Database(format!("Failed to query schedule: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DincharyaError::Database(format!("Failed to read schedule entry: {e}")))?;

        Ok(entries)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<ScheduleEntry> {
    Ok(ScheduleEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        datetime: datetime_column(row, 3)?,
        note: row.get(4)?,
        created_at: datetime_column(row, 5)?,
    })
}
