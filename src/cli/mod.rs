//! Command-line interface for dincharya.

pub mod args;
pub mod commands;
