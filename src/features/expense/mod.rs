//! Expenses and monthly totals.

mod entry;
mod storage;

pub use entry::{Expense, MonthlyTotals, NewExpense};
pub use storage::ExpenseStorage;
