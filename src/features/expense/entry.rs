//! Expense types.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::DincharyaError;

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    /// Row id.
    pub id: i64,
    /// Owning user.
    pub user_id: String,
    /// Amount spent.
    pub amount: f64,
    /// Spending category ("food", "travel", "company", ...).
    pub category: String,
    /// Optional note.
    pub note: Option<String>,
    /// Optional link to a receipt image.
    pub image_url: Option<String>,
    /// When the expense was recorded.
    pub created_at: NaiveDateTime,
}

/// An expense ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Amount spent.
    pub amount: f64,
    /// Spending category.
    pub category: String,
    /// Optional note.
    pub note: Option<String>,
    /// Optional link to a receipt image.
    pub image_url: Option<String>,
}

impl NewExpense {
    /// Check that the expense has a finite amount and a category.
    ///
    /// # Errors
    ///
    /// Returns `DincharyaError::InvalidInput` otherwise.
    pub fn validate(&self) -> Result<(), DincharyaError> {
        if !self.amount.is_finite() || self.category.trim().is_empty() {
            return Err(DincharyaError::InvalidInput(
                "amount and category required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Spending totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// Year of the month.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    /// Sum of every non-company category.
    pub personal: f64,
    /// Sum of the company category.
    pub company: f64,
    /// `personal + company`.
    pub total: f64,
}

impl MonthlyTotals {
    /// Empty totals for a month.
    #[must_use]
    pub const fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            personal: 0.0,
            company: 0.0,
            total: 0.0,
        }
    }

    /// Add one expense to the totals.
    pub fn record(&mut self, category: &str, amount: f64, company_category: &str) {
        if category == company_category {
            self.company += amount;
        } else {
            self.personal += amount;
        }
        self.total = self.personal + self.company;
    }
}
