//! Shared traits.
//!
//! The clock is the only source of "now" in the crate. Commands receive one
//! and hand the instant to the parser and storage explicitly.

use chrono::{Local, NaiveDateTime};

/// A source of the current wall-clock time.
pub trait Clock {
    /// The current moment.
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
