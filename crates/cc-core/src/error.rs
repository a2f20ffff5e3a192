//! Core error type.
//!
//! Configuration problems are always reported before a run starts, and
//! always name the offending field so the caller can point the user at it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error in `{field}`: {reason}")]
    Config {
        field:  String,
        reason: String,
    },

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Config`].
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::Config {
            field:  field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field for configuration errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Config { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Shorthand result type for `cc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
