//! Colortrack - color-similarity region tracking for live frames
//!
//! Colortrack segments a raster frame into connected regions of pixels
//! whose color is close to a chosen target color, then answers the two
//! queries an interactive caller needs per frame: the largest region
//! (a paint brush that follows a tracked blob) and a visualization
//! with every region flattened to its own flat color.
//!
//! # Overview
//!
//! - `colortrack-core` - image containers and packed color helpers
//! - `colortrack-region` - similarity predicate, flood-fill region
//!   growing, region catalog, and the engine facade
//! - `colortrack-paint` - display-mode value and the accumulation
//!   canvas for region brush strokes
//!
//! # Example
//!
//! ```
//! use colortrack::{Raster, color};
//! use colortrack::region::{GrowOptions, RegionEngine};
//!
//! let red = color::compose_rgb(220, 30, 30);
//! let frame = Raster::filled(32, 32, red);
//!
//! let mut engine = RegionEngine::new(GrowOptions::default());
//! engine.discover(&frame, red);
//! assert_eq!(engine.largest_region().unwrap().len(), 32 * 32);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colortrack_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colortrack_paint as paint;
pub use colortrack_region as region;
