//! Expense storage.
//!
//! Persists expenses to the local database and sums them per month.

use chrono::NaiveDateTime;
use rusqlite::params;

use super::entry::{Expense, MonthlyTotals, NewExpense};
use crate::core::{format_iso, month_bounds, truncate_to_seconds};
use crate::error::DincharyaError;
use crate::identity::UserId;
use crate::storage::Database;

/// Storage for expenses.
pub struct ExpenseStorage {
    db: Database,
}

impl ExpenseStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Store a new expense for `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense is invalid or the insert fails.
    pub fn add(
        &self,
        user: &UserId,
        expense: &NewExpense,
        created_at: NaiveDateTime,
    ) -> Result<Expense, DincharyaError> {
        expense.validate()?;
        let category = expense.category.trim().to_string();
        let created_at = truncate_to_seconds(created_at);

        let conn = self.db.connection();
        conn.execute(
            r"INSERT INTO expenses (user_id, amount, category, note, image_url, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user.as_str(),
                expense.amount,
                category,
                expense.note,
                expense.image_url,
                format_iso(created_at),
            ],
        )
        .map_err(|e| DincharyaError::Database(format!("Failed to insert expense: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, user = %user, amount = expense.amount, "added expense");

        Ok(Expense {
            id,
            user_id: user.as_str().to_string(),
            amount: expense.amount,
            category,
            note: expense.note.clone(),
            image_url: expense.image_url.clone(),
            created_at,
        })
    }

    /// Sum `user`'s expenses recorded during a calendar month.
    ///
    /// Expenses in `company_category` count as company spending, everything
    /// else as personal.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is invalid or the query fails.
    pub fn monthly_totals(
        &self,
        user: &UserId,
        year: i32,
        month: u32,
        company_category: &str,
    ) -> Result<MonthlyTotals, DincharyaError> {
        let (start, end) = month_bounds(year, month).ok_or_else(|| {
            DincharyaError::InvalidInput(format!("Invalid month {year}-{month}"))
        })?;

        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                r"SELECT category, amount
                  FROM expenses
                  WHERE user_id = ?1 AND created_at >= ?2 AND created_at < ?3",
            )
            .map_err(|e| DincharyaError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(
                params![user.as_str(), format_iso(start), format_iso(end)],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)),
            )
            .map_err(|e| DincharyaError::Database(format!("Failed to query expenses: {e}")))?;

        let mut totals = MonthlyTotals::empty(year, month);
        for row in rows {
            let (category, amount) = row
                .map_err(|e| DincharyaError::Database(format!("Failed to read expense: {e}")))?;
            totals.record(&category, amount, company_category);
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn storage() -> ExpenseStorage {
        ExpenseStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn expense(amount: f64, category: &str) -> NewExpense {
        NewExpense {
            amount,
            category: category.to_string(),
            note: None,
            image_url: None,
        }
    }

    #[test]
    fn test_add_expense() {
        let storage = storage();
        let user = UserId::demo();

        let mut new = expense(250.5, " food ");
        new.note = Some("thali".to_string());
        new.image_url = Some("https://example.com/receipt.jpg".to_string());

        let stored = storage.add(&user, &new, at(2024, 1, 10, 9, 0)).unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.category, "food");
        assert_eq!(stored.note.as_deref(), Some("thali"));
        assert_eq!(stored.created_at, at(2024, 1, 10, 9, 0));
    }

    #[test]
    fn test_add_matches_stored_row_with_subsecond_instant() {
        let storage = storage();
        let precise = at(2024, 1, 10, 9, 5)
            .with_second(42)
            .and_then(|dt| dt.with_nanosecond(123_456_789))
            .unwrap();

        let stored = storage.add(&UserId::demo(), &expense(99.0, "food"), precise).unwrap();
        assert_eq!(stored.created_at, at(2024, 1, 10, 9, 5).with_second(42).unwrap());

        let persisted = storage
            .db
            .connection()
            .query_row(
                "SELECT created_at FROM expenses WHERE id = ?1",
                params![stored.id],
                |row| crate::storage::datetime_column(row, 0),
            )
            .unwrap();
        assert_eq!(persisted, stored.created_at);
    }

    #[test]
    fn test_add_invalid_expense() {
        let storage = storage();
        let err = storage
            .add(&UserId::demo(), &expense(10.0, ""), at(2024, 1, 10, 9, 0))
            .unwrap_err();
        assert!(matches!(err, DincharyaError::InvalidInput(_)));
    }

    #[test]
    fn test_monthly_totals() {
        let storage = storage();
        let user = UserId::demo();

        storage.add(&user, &expense(250.5, "food"), at(2024, 1, 1, 0, 0)).unwrap();
        storage.add(&user, &expense(1000.0, "company"), at(2024, 1, 15, 12, 0)).unwrap();
        storage.add(&user, &expense(49.5, "travel"), at(2024, 1, 31, 23, 59)).unwrap();
        // Outside the month
        storage.add(&user, &expense(5.0, "food"), at(2023, 12, 31, 23, 59)).unwrap();
        storage.add(&user, &expense(7.0, "company"), at(2024, 2, 1, 0, 0)).unwrap();

        let totals = storage.monthly_totals(&user, 2024, 1, "company").unwrap();
        assert_eq!(totals.personal, 300.0);
        assert_eq!(totals.company, 1000.0);
        assert_eq!(totals.total, 1300.0);
    }

    #[test]
    fn test_monthly_totals_scoped_to_user() {
        let storage = storage();
        let asha = UserId::new("asha").unwrap();
        let ravi = UserId::new("ravi").unwrap();

        storage.add(&asha, &expense(100.0, "food"), at(2024, 3, 5, 10, 0)).unwrap();
        storage.add(&ravi, &expense(900.0, "food"), at(2024, 3, 5, 10, 0)).unwrap();

        let totals = storage.monthly_totals(&asha, 2024, 3, "company").unwrap();
        assert_eq!(totals.total, 100.0);
    }

    #[test]
    fn test_monthly_totals_custom_company_category() {
        let storage = storage();
        let user = UserId::demo();

        storage.add(&user, &expense(80.0, "office"), at(2024, 3, 5, 10, 0)).unwrap();
        storage.add(&user, &expense(20.0, "company"), at(2024, 3, 6, 10, 0)).unwrap();

        let totals = storage.monthly_totals(&user, 2024, 3, "office").unwrap();
        assert_eq!(totals.company, 80.0);
        assert_eq!(totals.personal, 20.0);
    }

    #[test]
    fn test_monthly_totals_empty_month() {
        let storage = storage();
        let totals = storage.monthly_totals(&UserId::demo(), 2024, 6, "company").unwrap();
        assert_eq!(totals, MonthlyTotals::empty(2024, 6));
    }

    #[test]
    fn test_monthly_totals_invalid_month() {
        let storage = storage();
        let err = storage
            .monthly_totals(&UserId::demo(), 2024, 13, "company")
            .unwrap_err();
        assert!(matches!(err, DincharyaError::InvalidInput(_)));
    }
}
