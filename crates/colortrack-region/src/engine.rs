//! Region engine - facade over discovery and catalog queries
//!
//! A `RegionEngine` is configured once with [`GrowOptions`] and then
//! fed frames: each [`RegionEngine::discover`] call replaces the held
//! frame and catalog wholesale, and the query methods answer against
//! the most recent pass. Queries before the first pass return `None`
//! rather than failing.

use crate::catalog::RegionCatalog;
use crate::grow::{GrowOptions, Region};
use colortrack_core::Raster;

/// Facade owning the most recent frame and its region catalog.
///
/// Single-threaded by design: at most one discovery pass runs at a
/// time, and callers must not query concurrently with `discover` on
/// the same instance without external synchronization.
#[derive(Debug, Default)]
pub struct RegionEngine {
    options: GrowOptions,
    frame: Option<Raster>,
    catalog: RegionCatalog,
}

impl RegionEngine {
    /// Create an engine with the given discovery options and no frame.
    pub fn new(options: GrowOptions) -> Self {
        Self {
            options,
            frame: None,
            catalog: RegionCatalog::empty(),
        }
    }

    /// Borrow the engine's discovery options.
    pub fn options(&self) -> &GrowOptions {
        &self.options
    }

    /// Borrow the most recently supplied frame, if any.
    pub fn frame(&self) -> Option<&Raster> {
        self.frame.as_ref()
    }

    /// Borrow the catalog from the most recent pass.
    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Run one discovery pass over `frame` with `target` as the
    /// reference color, replacing the held frame and catalog.
    ///
    /// Holding the frame is cheap: only the `Arc` handle is cloned.
    pub fn discover(&mut self, frame: &Raster, target: u32) {
        self.catalog = RegionCatalog::discover(frame, target, &self.options);
        self.frame = Some(frame.clone());
    }

    /// The largest region from the most recent pass, or `None` when no
    /// pass has run or no region was found.
    pub fn largest_region(&self) -> Option<&Region> {
        self.catalog.largest()
    }

    /// A copy of the held frame with every region flattened to its own
    /// fresh color, or `None` when no pass has run.
    pub fn recolored_image(&self) -> Option<Raster> {
        let frame = self.frame.as_ref()?;
        // The catalog was built over this exact frame, so the
        // dimension check cannot fail.
        self.catalog.recolor(frame).ok()
    }
}
