//! Error types for dincharya.

use thiserror::Error;

/// Errors that can occur in dincharya.
#[derive(Error, Debug)]
pub enum DincharyaError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A command was given missing or malformed input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No user identity could be resolved for the command.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DincharyaError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::Unauthenticated(_) => 3,
            Self::Config(_) | Self::Database(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
