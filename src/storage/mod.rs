//! Storage layer for dincharya.
//!
//! This module provides SQLite-based persistence for:
//! - Schedule entries
//! - Expenses
//!
//! Every row belongs to one user and every query is scoped to that user.

mod database;
mod migrations;

pub use database::Database;

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::Row;

use crate::core::ISO_FORMAT;

/// Read an ISO date-time column written with [`crate::core::format_iso`].
///
/// # Errors
///
/// Returns a conversion error if the stored text is not a valid date-time.
pub fn datetime_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, ISO_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
