//! Configuration management for dincharya.
//!
//! This module handles loading and saving configuration from `~/.dincharya/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AuthConfig, ColorSetting, Config, ExpenseConfig, GeneralConfig};
