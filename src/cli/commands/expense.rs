//! Expense command implementations.
//!
//! This module implements `dincharya expense add|monthly`.

use chrono::Datelike;

use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::DincharyaError;
use crate::features::expense::{ExpenseStorage, NewExpense};
use crate::identity::UserId;
use crate::output::{format_expense, format_monthly_totals};

/// Execute the expense add command.
///
/// # Errors
///
/// Returns an error if the expense is invalid or cannot be stored.
pub fn expense_add(
    storage: &ExpenseStorage,
    user: &UserId,
    expense: &NewExpense,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    let stored = storage.add(user, expense, clock.now())?;
    format_expense(&stored, format)
}

/// Execute the expense monthly command.
///
/// A missing or zero year/month falls back to the clock's current one.
///
/// # Errors
///
/// Returns an error if the month is invalid or the query fails.
pub fn expense_monthly(
    storage: &ExpenseStorage,
    user: &UserId,
    year: Option<i32>,
    month: Option<u32>,
    company_category: &str,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    let now = clock.now();
    let year = year.filter(|y| *y != 0).unwrap_or_else(|| now.year());
    let month = month.filter(|m| *m != 0).unwrap_or_else(|| now.month());

    let totals = storage.monthly_totals(user, year, month, company_category)?;
    format_monthly_totals(&totals, format)
}
