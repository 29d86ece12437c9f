//! Path resolution for dincharya configuration and data files.
//!
//! All dincharya data is stored in `~/.dincharya/`:
//! - `config.yaml` - Main configuration file
//! - `dincharya.db` - SQLite database for schedule entries and expenses

use std::path::PathBuf;

use crate::error::DincharyaError;

/// Paths to dincharya configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.dincharya/`
    pub root: PathBuf,
    /// Config file: `~/.dincharya/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.dincharya/dincharya.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DincharyaError> {
        let home = std::env::var("HOME").map_err(|_| {
            DincharyaError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".dincharya")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("dincharya.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), DincharyaError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                DincharyaError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
