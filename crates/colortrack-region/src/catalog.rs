//! Region catalog - the result of one discovery pass
//!
//! Holds the disjoint regions found over one frame, in the raster order
//! of their seeds, and answers the two queries callers care about:
//! the largest region, and a visualization with every region flattened
//! to its own uniform color.

use crate::error::{RegionError, RegionResult};
use crate::grow::{GrowOptions, Region, find_regions};
use colortrack_core::{Raster, color};
use rand::RngExt;

/// The regions discovered by one pass over one frame.
///
/// Re-running discovery replaces a catalog wholesale; regions from
/// different passes are never merged.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    width: u32,
    height: u32,
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Create an empty catalog with no source frame.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Run one discovery pass over `image` and collect the results.
    pub fn discover(image: &Raster, target: u32, options: &GrowOptions) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            regions: find_regions(image, target, options),
        }
    }

    /// Width of the frame the catalog was built over.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the frame the catalog was built over.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of regions in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check whether the catalog holds no regions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Borrow the regions, in the raster order of their seeds.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterate over the regions.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// The region with the most pixels, or `None` for an empty catalog.
    ///
    /// Ties go to the first-discovered region (raster order of seeds),
    /// keeping the result deterministic. Note that a strict `>` scan is
    /// required here: `Iterator::max_by_key` keeps the *last* maximum.
    pub fn largest(&self) -> Option<&Region> {
        let mut best: Option<&Region> = None;
        for region in &self.regions {
            if best.is_none_or(|b| region.len() > b.len()) {
                best = Some(region);
            }
        }
        best
    }

    /// Produce a copy of `source` with every region flattened to one
    /// color drawn fresh for that region, so regions are visually
    /// distinguishable. Pixels outside all regions keep their original
    /// color.
    ///
    /// Colors are random per region per call; only uniformity within a
    /// region is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::FrameMismatch`] if `source` does not have
    /// the dimensions the catalog was built over.
    pub fn recolor(&self, source: &Raster) -> RegionResult<Raster> {
        if source.width() != self.width || source.height() != self.height {
            return Err(RegionError::FrameMismatch {
                expected: (self.width, self.height),
                actual: (source.width(), source.height()),
            });
        }

        let mut output = source.to_mut();
        let mut rng = rand::rng();
        for region in &self.regions {
            let fill = color::compose_rgb(rng.random(), rng.random(), rng.random());
            for p in region.points() {
                // Region points come from a raster of these dimensions
                output.set_unchecked(p.x, p.y, fill);
            }
        }
        Ok(output.into())
    }
}

impl<'a> IntoIterator for &'a RegionCatalog {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
