//! Error types for table loading.

use std::io;

/// Errors that can occur while reading or parsing a table.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input contained no lines at all.
    #[error("input is empty: no header line found")]
    Empty,

    /// Two header tokens share the same name.
    #[error("duplicate column name '{0}' in header")]
    DuplicateColumn(String),

    /// A delimited header contained an empty name.
    #[error("empty column name at position {0} in header")]
    EmptyColumn(usize),

    /// The delimited body could not be parsed.
    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// Failed to read the input source.
    #[error("failed to read input: {0}")]
    Io(#[source] io::Error),
}

impl FormatError {
    pub(crate) fn csv(err: &csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        Self::Csv {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, FormatError>;
