//! Error types for core module
//!
//! Provides custom error types for the front-end: settings persistence and
//! decoding of typed squares and commands.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Typed square could not be understood
    #[error("Can't read square {input:?}: {reason}")]
    InvalidSquare { input: String, reason: &'static str },

    /// Typed line is neither a square nor a known command
    #[error("Unknown command: {input:?}")]
    UnknownCommand { input: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
