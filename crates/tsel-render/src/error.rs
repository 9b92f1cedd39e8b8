//! Error types for output rendering.

use thiserror::Error;

/// Errors raised while writing rendered or exported output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
