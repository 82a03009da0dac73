//! Error types for colortrack-core

use thiserror::Error;

/// Errors raised by the core image containers
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinate outside the raster bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Pixel buffer length does not match the raster dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
