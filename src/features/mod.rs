//! Feature implementations for dincharya.
//!
//! This module contains:
//! - Natural language event parsing
//! - Schedule entries
//! - Expenses and monthly totals

pub mod expense;
pub mod nlp;
pub mod schedule;
