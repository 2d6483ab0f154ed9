//! Error types for the projection engine

use thiserror::Error;

/// Errors raised while validating inputs, running a projection, or moving
/// scenarios in and out of files
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    /// Shorthand for an `InvalidInput` error on a named field
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            ProjectionError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
