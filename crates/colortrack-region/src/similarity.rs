//! Color similarity predicate
//!
//! Two colors are "similar enough" when the sum of their absolute
//! per-channel RGB differences stays below a threshold. The predicate
//! is pure and total over all color pairs; alpha is ignored.

use colortrack_core::color;

/// Default similarity threshold for [`colors_match`].
pub const DEFAULT_MAX_DIFF: u32 = 40;

/// Sum of absolute per-channel RGB differences between two packed
/// pixels. Alpha is ignored.
#[inline]
pub fn color_diff(c1: u32, c2: u32) -> u32 {
    let (r1, g1, b1) = color::extract_rgb(c1);
    let (r2, g2, b2) = color::extract_rgb(c2);
    (r1 as i32 - r2 as i32).unsigned_abs()
        + (g1 as i32 - g2 as i32).unsigned_abs()
        + (b1 as i32 - b2 as i32).unsigned_abs()
}

/// Check whether `candidate` is similar enough to `target`.
///
/// The comparison is strict: a difference equal to `max_diff` does not
/// match.
#[inline]
pub fn colors_match(target: u32, candidate: u32, max_diff: u32) -> bool {
    color_diff(target, candidate) < max_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use colortrack_core::color::{compose_rgb, compose_rgba};

    #[test]
    fn test_color_diff_sums_channels() {
        let a = compose_rgb(100, 50, 20);
        let b = compose_rgb(90, 60, 25);
        assert_eq!(color_diff(a, b), 10 + 10 + 5);
    }

    #[test]
    fn test_identical_colors_match() {
        let c = compose_rgb(3, 4, 5);
        assert_eq!(color_diff(c, c), 0);
        assert!(colors_match(c, c, 1));
    }

    #[test]
    fn test_threshold_is_strict() {
        let a = compose_rgb(0, 0, 0);
        let b = compose_rgb(40, 0, 0);
        assert_eq!(color_diff(a, b), 40);
        assert!(!colors_match(a, b, 40));
        assert!(colors_match(a, b, 41));
    }

    #[test]
    fn test_alpha_ignored() {
        let opaque = compose_rgba(10, 20, 30, 255);
        let transparent = compose_rgba(10, 20, 30, 0);
        assert_eq!(color_diff(opaque, transparent), 0);
        assert!(colors_match(opaque, transparent, 1));
    }

    #[test]
    fn test_extreme_pair() {
        let black = compose_rgb(0, 0, 0);
        let white = compose_rgb(255, 255, 255);
        assert_eq!(color_diff(black, white), 765);
        assert!(!colors_match(black, white, DEFAULT_MAX_DIFF));
    }
}
