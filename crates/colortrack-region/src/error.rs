//! Error types for colortrack-region

use thiserror::Error;

/// Errors that can occur during region operations
///
/// Region discovery itself is total; errors arise only at contract
/// boundaries, such as recoloring a frame whose dimensions do not match
/// the catalog's.
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colortrack_core::Error),

    /// Frame dimensions do not match the catalog's source frame
    #[error(
        "frame mismatch: catalog built over {}x{}, got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    FrameMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
