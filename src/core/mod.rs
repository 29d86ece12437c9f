//! Core abstractions for dincharya.
//!
//! This module provides the clock and date/time helpers used across features.

mod datetime;
mod traits;

pub use datetime::{format_iso, month_bounds, parse_datetime_arg, truncate_to_seconds, ISO_FORMAT};
pub use traits::{Clock, FixedClock, SystemClock};
