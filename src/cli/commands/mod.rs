//! Command implementations for dincharya.
//!
//! This module contains the implementation of all CLI commands. Commands take
//! their collaborators (storage, clock, identity) as arguments and return the
//! text to print.

mod completions;
mod expense;
mod schedule;

pub use completions::completions;
pub use expense::{expense_add, expense_monthly};
pub use schedule::{schedule_add, schedule_list, schedule_parse, schedule_preview};
