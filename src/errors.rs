//! Error types for bmicalc
//!
//! The domain core never fails; every error here comes from validation,
//! preference storage or the clipboard.

use thiserror::Error;

/// Main error type for the calculator library
#[derive(Error, Debug)]
pub enum BmiError {
    /// Rejected weight or height
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Preferences file errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Clipboard access errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BmiError {
    /// Build an `InvalidInput` error for the named field
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        BmiError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Message shown to the user when a calculation cannot run
    pub fn user_message(&self) -> &'static str {
        match self {
            BmiError::InvalidInput { .. } => "Please enter valid numbers.",
            BmiError::ConfigError(_) => "Could not save preferences.",
            BmiError::Clipboard(_) => "Could not access the clipboard.",
            BmiError::IoError(_) | BmiError::SerializationError(_) => "Unexpected I/O failure.",
        }
    }
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, BmiError>;
