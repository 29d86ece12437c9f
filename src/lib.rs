//! dincharya - a personal schedule and expense book
//!
//! This crate provides a command-line interface for recording calendar
//! events and expenses per user in a local SQLite database. Events can be
//! entered as free-form English or Hinglish phrases, which the
//! [`features::nlp`] module turns into a title, a date-time and a note.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod identity;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::DincharyaError;
pub use features::nlp::{parse_event, ParsedEvent};
