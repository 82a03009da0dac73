//! Visited mask for region discovery
//!
//! A per-pass boolean grid recording which pixels have already been
//! claimed by a traversal, so no pixel is processed twice.

/// Per-pass marker grid over an image's pixel coordinates.
///
/// Owned exclusively by one discovery pass; a fresh mask is allocated
/// for every pass.
#[derive(Debug)]
pub struct VisitedMask {
    width: u32,
    cells: Vec<bool>,
}

impl VisitedMask {
    /// Create an all-unset mask for a `width` x `height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            cells: vec![false; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether (x, y) has been visited.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Mark (x, y) as visited.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let mask = VisitedMask::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                assert!(!mask.is_visited(x, y));
            }
        }
    }

    #[test]
    fn test_mark_sets_only_target() {
        let mut mask = VisitedMask::new(3, 3);
        mask.mark(1, 2);
        assert!(mask.is_visited(1, 2));
        // Transposed coordinate stays unset
        assert!(!mask.is_visited(2, 1));
    }
}
