//! Natural language parsing for event entry.
//!
//! This module provides parsing for free-form event phrases like:
//! - "lunch tomorrow at 1pm with Raj"
//! - "kal 6 baje milna hai"
//! - "review next friday topic budget"

mod parser;

pub use parser::{apply_meridiem, days_until_next, parse_event, Meridiem, ParsedEvent, UNTITLED_EVENT};
