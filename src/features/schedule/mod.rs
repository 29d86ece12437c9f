//! Schedule entries.
//!
//! Calendar events entered either as explicit title/date-time pairs or as a
//! natural language phrase.

mod entry;
mod storage;

pub use entry::{NewScheduleEntry, ScheduleEntry, ScheduleRequest};
pub use storage::ScheduleStorage;
