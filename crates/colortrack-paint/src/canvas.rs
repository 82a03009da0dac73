//! Paint canvas - the persistent accumulation buffer
//!
//! Brush strokes accumulate here across frames: each stroke stamps a
//! fixed brush color at exactly the coordinates of a discovered region.
//! The canvas is explicitly owned by whoever drives the paint loop and
//! is cleared, read, and persisted entirely at that caller's choosing.

use crate::error::PaintResult;
use colortrack_core::{Raster, RasterMut, color};
use colortrack_region::Region;

/// Default brush color: opaque blue.
pub const DEFAULT_BRUSH: u32 = color::compose_rgb(0, 0, 255);

/// Accumulation canvas for region brush strokes.
///
/// Starts out transparent black; stamping never touches pixels outside
/// the stamped region, so strokes build up across frames until
/// [`PaintCanvas::clear`] resets the buffer.
#[derive(Debug)]
pub struct PaintCanvas {
    buffer: RasterMut,
}

impl PaintCanvas {
    /// Create a blank canvas, normally sized to match the frame source.
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = Raster::new(width, height)
            .try_into_mut()
            .unwrap_or_else(|r| r.to_mut());
        Self { buffer }
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Stamp `brush` onto the canvas at exactly the region's
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::PaintError::Core`] error if a region point
    /// falls outside the canvas, which can only happen when the canvas
    /// was not sized to the frame the region came from.
    pub fn stamp(&mut self, region: &Region, brush: u32) -> PaintResult<()> {
        for p in region.points() {
            self.buffer.set(p.x, p.y, brush)?;
        }
        Ok(())
    }

    /// Take an immutable copy of the current painting.
    pub fn snapshot(&self) -> Raster {
        self.buffer.snapshot()
    }
}
