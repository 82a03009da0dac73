//! Raster - the image container
//!
//! A `Raster` is a fixed-size 2D grid of packed 32-bit `0xRRGGBBAA`
//! pixels. It is the frame format consumed by region discovery and
//! produced by recoloring.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership), so a frame
//! handle can be held by an engine while the frame source keeps its own.
//! To modify pixel data, convert to [`RasterMut`] via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back
//! with `Into<Raster>`.
//!
//! # Zero-area rasters
//!
//! A raster with zero width or height is valid and simply contains no
//! pixels. Operations over it are total: scans visit nothing, queries
//! return `None`.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed 0xRRGGBBAA pixels, row-major
    data: Vec<u32>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// Immutable image container.
///
/// Cloning a `Raster` is cheap: only the `Arc` handle is copied.
///
/// # Examples
///
/// ```
/// use colortrack_core::{Raster, color};
///
/// let raster = Raster::filled(4, 3, color::compose_rgb(255, 0, 0));
/// assert_eq!(raster.width(), 4);
/// assert_eq!(raster.rgb(2, 1), Some((255, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all pixels set to zero
    /// (transparent black).
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0u32; width as usize * height as usize];
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Create a new raster with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Self {
        let data = vec![pixel; width as usize * height as usize];
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Create a raster from a row-major buffer of packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSizeMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the total pixel count.
    #[inline]
    pub fn area(&self) -> usize {
        self.inner.data.len()
    }

    /// Check whether the raster has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get the packed pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if self.inner.in_bounds(x, y) {
            Some(self.inner.data[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Get the packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get the RGB values at (x, y), ignoring alpha.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get(x, y).map(color::extract_rgb)
    }

    /// Borrow the raw row-major pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.inner.data
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Convert to a mutable raster without copying, if this handle is
    /// the only owner.
    ///
    /// Returns the raster back as the error when the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies the pixel data.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData::clone(&self.inner),
        }
    }
}

/// Mutable image container.
///
/// Allows modification of pixel data with exclusive access enforced at
/// compile time. Convert back to an immutable [`Raster`] using
/// `Into<Raster>`, or take an immutable copy with
/// [`RasterMut::snapshot`] while keeping the buffer.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the packed pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if self.inner.in_bounds(x, y) {
            Some(self.inner.data[self.inner.index(x, y)])
        } else {
            None
        }
    }

    /// Get the packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set the packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out
    /// of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = pixel;
        Ok(())
    }

    /// Set the packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, pixel: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = pixel;
    }

    /// Set an opaque RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out
    /// of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set(x, y, color::compose_rgb(r, g, b))
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }

    /// Take an immutable copy of the current contents, keeping the
    /// buffer available for further mutation.
    pub fn snapshot(&self) -> Raster {
        Raster {
            inner: Arc::new(self.inner.clone()),
        }
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let raster = Raster::new(7, 3);
        assert_eq!(raster.width(), 7);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.area(), 21);
        assert!(!raster.is_empty());
    }

    #[test]
    fn test_zero_area() {
        let raster = Raster::new(0, 10);
        assert!(raster.is_empty());
        assert_eq!(raster.area(), 0);
        assert_eq!(raster.get(0, 0), None);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut rm = Raster::new(5, 5).to_mut();
        let pixel = color::compose_rgb(12, 34, 56);
        rm.set(2, 3, pixel).unwrap();
        assert_eq!(rm.get(2, 3), Some(pixel));

        let raster: Raster = rm.into();
        assert_eq!(raster.get(2, 3), Some(pixel));
        assert_eq!(raster.rgb(2, 3), Some((12, 34, 56)));
        assert_eq!(raster.get(0, 0), Some(0));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut rm = Raster::new(4, 4).to_mut();
        let err = rm.set(4, 0, 1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { x: 4, y: 0, .. }));
    }

    #[test]
    fn test_from_pixels() {
        let pixel = color::compose_rgb(9, 8, 7);
        let raster = Raster::from_pixels(2, 2, vec![pixel; 4]).unwrap();
        assert_eq!(raster.get(1, 1), Some(pixel));

        let err = Raster::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataSizeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_to_mut_copies() {
        let original = Raster::filled(3, 3, 5);
        let mut copy = original.to_mut();
        copy.set(0, 0, 99).unwrap();
        // The original is unaffected by the mutable copy
        assert_eq!(original.get(0, 0), Some(5));
        assert_eq!(copy.get(0, 0), Some(99));
    }

    #[test]
    fn test_try_into_mut_unique() {
        let raster = Raster::new(2, 2);
        assert!(raster.try_into_mut().is_ok());

        let raster = Raster::new(2, 2);
        let _held = raster.clone();
        // Shared handle: hands the raster back instead
        assert!(raster.try_into_mut().is_err());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut rm = Raster::new(2, 2).to_mut();
        rm.set(0, 0, 1).unwrap();
        let snap = rm.snapshot();
        rm.set(0, 0, 2).unwrap();
        assert_eq!(snap.get(0, 0), Some(1));
        assert_eq!(rm.get(0, 0), Some(2));
    }

    #[test]
    fn test_fill() {
        let mut rm = Raster::new(3, 2).to_mut();
        rm.fill(7);
        assert!(rm.snapshot().pixels().iter().all(|&p| p == 7));
    }
}
