//! colortrack-region - Region discovery for the colortrack tracker
//!
//! This crate finds connected regions of pixels whose color is close to
//! a chosen target color, the core operation behind color-blob tracking:
//!
//! - **Color similarity** - channel-difference predicate against a threshold
//! - **Region growing** - breadth-first flood fill over the pixel grid
//! - **Region catalog** - one pass's regions with largest-region and
//!   flat-recolor queries
//! - **Region engine** - facade holding the current frame and catalog
//!
//! # Examples
//!
//! ```
//! use colortrack_core::{Raster, color};
//! use colortrack_region::{GrowOptions, RegionEngine};
//!
//! let green = color::compose_rgb(0, 200, 0);
//! let frame = Raster::filled(64, 64, green);
//!
//! let mut engine = RegionEngine::new(GrowOptions::default());
//! engine.discover(&frame, green);
//!
//! let largest = engine.largest_region().unwrap();
//! assert_eq!(largest.len(), 64 * 64);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod grow;
pub mod similarity;
pub mod visited;

// Re-export core types
pub use colortrack_core;

pub use catalog::RegionCatalog;
pub use engine::RegionEngine;
pub use error::{RegionError, RegionResult};
pub use grow::{Connectivity, DEFAULT_MIN_AREA, GrowOptions, Region, find_regions};
pub use similarity::{DEFAULT_MAX_DIFF, color_diff, colors_match};
pub use visited::VisitedMask;
