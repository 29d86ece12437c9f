//! `SQLite` database connection.
//!
//! The database is stored at `~/.dincharya/dincharya.db` and contains tables for:
//! - Schedule entries
//! - Expenses

use rusqlite::Connection;

use crate::error::DincharyaError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, DincharyaError> {
        tracing::debug!(path = %path.display(), "opening database");

        let conn = Connection::open(path).map_err(|e| {
            DincharyaError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        Self::with_connection(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, DincharyaError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DincharyaError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, DincharyaError> {
        let db = Self { conn };
        migrations::run(&db.conn)?;
        Ok(db)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, DincharyaError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    ///
    /// This is primarily for use by feature modules that need direct access.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
