//! Integer pixel coordinates

use std::cmp::Ordering;
use std::fmt;

/// A pixel coordinate in a raster.
///
/// The origin is the top-left corner; `x` grows rightward in
/// `[0, width)` and `y` grows downward in `[0, height)`.
///
/// Points order row-major (by `y`, then `x`), matching the raster
/// scan order used by region discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
