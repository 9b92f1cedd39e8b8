//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building or applying filters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// A predicate, selection or ordering names a column the schema lacks.
    #[error("unknown column '{column}' found in {context}")]
    UnknownColumn {
        column: String,
        context: &'static str,
    },

    /// A predicate spec could not be interpreted.
    #[error("invalid predicate '{0}': missing column name")]
    InvalidPredicate(String),
}

impl SeekerError {
    /// Shorthand for an [`SeekerError::UnknownColumn`].
    pub fn unknown_column(column: impl Into<String>, context: &'static str) -> Self {
        SeekerError::UnknownColumn {
            column: column.into(),
            context,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
