//! Error handling for Accord
//!
//! Every error carries a stable code and, where it helps, recovery suggestions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Accord operations
pub type Result<T> = std::result::Result<T, AccordError>;

/// Main error type for Accord operations
#[derive(Error, Debug)]
pub enum AccordError {
    // Request Errors
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Unknown note: {id}")]
    UnknownNote { id: String },

    // Catalog / Config Errors
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AccordError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AccordError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            AccordError::InvalidInput { .. } => "INVALID_INPUT",
            AccordError::UnknownNote { .. } => "UNKNOWN_NOTE",
            AccordError::InvalidCatalog { .. } => "INVALID_CATALOG",
            AccordError::InvalidConfig { .. } => "INVALID_CONFIG",
            AccordError::FileNotFound { .. } => "FILE_NOT_FOUND",
            AccordError::Io(_) => "IO_ERROR",
            AccordError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            AccordError::InvalidInput { .. } => vec![
                "Select at least one note, each note only once",
                "Total mass must be greater than zero",
                "Concentration must be above 0% and at most 100%",
            ],
            AccordError::UnknownNote { .. } => vec![
                "Run 'accord-cli catalog' to list the available note ids",
                "Note ids are short upper-case codes such as SDW or BRG",
            ],
            AccordError::InvalidCatalog { .. } => vec![
                "Every note needs a unique, non-empty id",
                "Longevity and sillage ratings must be positive numbers",
            ],
            AccordError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Omit --catalog to use the built-in catalog",
            ],
            _ => vec![],
        }
    }
}
