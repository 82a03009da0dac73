//! Error types for colortrack-paint

use thiserror::Error;

/// Errors that can occur while painting
#[derive(Debug, Error)]
pub enum PaintError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colortrack_core::Error),
}

/// Result type for paint operations
pub type PaintResult<T> = Result<T, PaintError>;
