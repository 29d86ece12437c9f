//! Output formatting for dincharya.
//!
//! This module provides formatters for displaying events and expenses in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::DincharyaError;
use crate::features::expense::{Expense, MonthlyTotals};
use crate::features::nlp::ParsedEvent;
use crate::features::schedule::ScheduleEntry;

pub use json::*;
pub use pretty::*;

/// Format a parsed (not stored) event based on output format
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_parsed_event(
    event: &ParsedEvent,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_event_pretty(event)),
        OutputFormat::Json => format_parsed_event_json(event),
    }
}

/// Format a stored schedule entry based on output format
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_schedule_entry(
    entry: &ScheduleEntry,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    match format {
        OutputFormat::Pretty => Ok(format_schedule_entry_pretty(entry)),
        OutputFormat::Json => format_schedule_entry_json(entry),
    }
}

/// Format schedule entries based on output format
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_schedule(
    entries: &[ScheduleEntry],
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    match format {
        OutputFormat::Pretty => Ok(format_schedule_pretty(entries)),
        OutputFormat::Json => format_schedule_json(entries),
    }
}

/// Format a stored expense based on output format
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_expense(expense: &Expense, format: OutputFormat) -> Result<String, DincharyaError> {
    match format {
        OutputFormat::Pretty => Ok(format_expense_pretty(expense)),
        OutputFormat::Json => format_expense_json(expense),
    }
}

/// Format monthly totals based on output format
///
/// # Errors
///
/// Returns `DincharyaError::Json` if JSON serialization fails.
pub fn format_monthly_totals(
    totals: &MonthlyTotals,
    format: OutputFormat,
) -> Result<String, DincharyaError> {
    match format {
        OutputFormat::Pretty => Ok(format_monthly_totals_pretty(totals)),
        OutputFormat::Json => format_monthly_totals_json(totals),
    }
}
