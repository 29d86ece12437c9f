//! Database migrations for dincharya.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::DincharyaError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, DincharyaError> {
    // Try to read from user_version pragma
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| DincharyaError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), DincharyaError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| DincharyaError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), DincharyaError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    // Run migrations in order
    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running database migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), DincharyaError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(DincharyaError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `schedule_entries`: Calendar events per user
/// - `expenses`: Recorded spending per user
fn migrate_v1(conn: &Connection) -> Result<(), DincharyaError> {
    conn.execute_batch(
        r"
        -- Schedule entries
        CREATE TABLE IF NOT EXISTS schedule_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            datetime TEXT NOT NULL,
            note TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_schedule_entries_user_datetime
        ON schedule_entries(user_id, datetime);

        -- Expenses
        CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            note TEXT,
            image_url TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_user_created
        ON expenses(user_id, created_at);
        ",
    )
    .map_err(|e| DincharyaError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        // Run migration
        run(&conn).unwrap();

        // Verify version
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        // Verify tables exist by inserting data
        conn.execute(
            "INSERT INTO schedule_entries (user_id, title, datetime, created_at)
             VALUES ('demo', 'lunch', '2024-01-11T13:00:00', '2024-01-10T09:00:00')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO expenses (user_id, amount, category, created_at)
             VALUES ('demo', 250.5, 'food', '2024-01-10T09:00:00')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Run migrations twice
        run(&conn).unwrap();
        run(&conn).unwrap();

        // Should still be at current version
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();

        // New database should have version 0
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
