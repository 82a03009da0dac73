//! colortrack-paint - Painting support around region discovery
//!
//! The region core knows nothing about presentation. This crate holds
//! the two pieces a painting front end needs on top of it:
//!
//! - [`DisplayMode`] - an explicit value for which view to present,
//!   passed into the render step instead of living as process-wide
//!   mutable state
//! - [`PaintCanvas`] - the persistent accumulation buffer that brush
//!   strokes (largest-region stamps) build up across frames, with an
//!   explicit clear operation
//!
//! Actual rendering, input dispatch, and file persistence stay outside
//! this workspace.

pub mod canvas;
pub mod error;
pub mod mode;

pub use canvas::{DEFAULT_BRUSH, PaintCanvas};
pub use error::{PaintError, PaintResult};
pub use mode::DisplayMode;
