//! Region growing via breadth-first flood fill
//!
//! One discovery pass scans the image in raster order and, from every
//! not-yet-visited pixel matching the target color, grows a maximal
//! connected component by repeatedly admitting qualifying neighbors.
//! Components below a minimum size are discarded but stay visited, so
//! each pixel is processed at most once and the whole pass is O(W*H).

use crate::similarity::{DEFAULT_MAX_DIFF, colors_match};
use crate::visited::VisitedMask;
use colortrack_core::{Point, Raster};
use std::collections::VecDeque;

/// Default minimum pixel count for a region to be reported.
pub const DEFAULT_MIN_AREA: usize = 50;

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (N, S, E, W)
    FourWay,
    /// 8-way connectivity (N, S, E, W, NE, NW, SE, SW)
    #[default]
    EightWay,
}

/// Options for region growing
#[derive(Debug, Clone)]
pub struct GrowOptions {
    /// Maximum color difference for pixels to be considered similar
    pub max_diff: u32,
    /// Minimum number of pixels for a region to be reported
    pub min_area: usize,
    /// Connectivity type (4-way or 8-way)
    pub connectivity: Connectivity,
}

impl Default for GrowOptions {
    fn default() -> Self {
        Self {
            max_diff: DEFAULT_MAX_DIFF,
            min_area: DEFAULT_MIN_AREA,
            connectivity: Connectivity::EightWay,
        }
    }
}

impl GrowOptions {
    /// Set the maximum color difference.
    pub fn with_max_diff(mut self, max_diff: u32) -> Self {
        self.max_diff = max_diff;
        self
    }

    /// Set the minimum region size.
    pub fn with_min_area(mut self, min_area: usize) -> Self {
        self.min_area = min_area;
        self
    }

    /// Set the connectivity type.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// A connected region of pixels matching a target color.
///
/// Points are listed in the order the traversal claimed them, starting
/// with the seed pixel. A region is created complete by one traversal
/// and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Number of pixels in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the region has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the region's points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the region, yielding its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Iterate over the region's points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Bounding box of the region as (top-left, bottom-right) corners,
    /// both inclusive. `None` for an empty region.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Find all connected regions of pixels similar to `target`.
///
/// Scans in raster order (top-to-bottom, left-to-right) and flood-fills
/// from each unvisited matching pixel. Pixels are marked visited when
/// enqueued, never enqueuing a coordinate twice, so the resulting
/// regions are pairwise disjoint. Components smaller than
/// `options.min_area` are dropped.
///
/// Regions are returned in the raster order of their seed pixels. A
/// zero-area image yields an empty vector; the operation has no error
/// conditions.
pub fn find_regions(image: &Raster, target: u32, options: &GrowOptions) -> Vec<Region> {
    let width = image.width();
    let height = image.height();

    let mut visited = VisitedMask::new(width, height);
    let mut regions = Vec::new();
    let mut queue: VecDeque<Point> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if visited.is_visited(x, y)
                || !colors_match(target, image.get_unchecked(x, y), options.max_diff)
            {
                continue;
            }

            // Grow one maximal component from this seed.
            let mut points = Vec::new();
            visited.mark(x, y);
            queue.push_back(Point::new(x, y));

            while let Some(p) = queue.pop_front() {
                points.push(p);

                // 3x3 window around p, clipped to the image bounds
                let x0 = p.x.saturating_sub(1);
                let y0 = p.y.saturating_sub(1);
                let x1 = (p.x + 1).min(width - 1);
                let y1 = (p.y + 1).min(height - 1);

                for ny in y0..=y1 {
                    for nx in x0..=x1 {
                        if nx == p.x && ny == p.y {
                            continue;
                        }
                        if options.connectivity == Connectivity::FourWay
                            && nx != p.x
                            && ny != p.y
                        {
                            continue;
                        }
                        if visited.is_visited(nx, ny) {
                            continue;
                        }
                        if colors_match(target, image.get_unchecked(nx, ny), options.max_diff) {
                            visited.mark(nx, ny);
                            queue.push_back(Point::new(nx, ny));
                        }
                    }
                }
            }

            if points.len() >= options.min_area {
                regions.push(Region { points });
            }
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use colortrack_core::color::compose_rgb;
    use std::collections::HashSet;

    const WHITE: u32 = compose_rgb(255, 255, 255);
    const BLACK: u32 = compose_rgb(0, 0, 0);

    fn image_with_blocks(
        width: u32,
        height: u32,
        background: u32,
        blocks: &[(u32, u32, u32, u32, u32)],
    ) -> Raster {
        let mut rm = Raster::filled(width, height, background).to_mut();
        for &(bx, by, bw, bh, pixel) in blocks {
            for y in by..by + bh {
                for x in bx..bx + bw {
                    rm.set_unchecked(x, y, pixel);
                }
            }
        }
        rm.into()
    }

    #[test]
    fn test_single_block() {
        // 3x3 white block centered in a 5x5 black image
        let image = image_with_blocks(5, 5, BLACK, &[(1, 1, 3, 3, WHITE)]);
        let options = GrowOptions::default().with_min_area(1);

        let regions = find_regions(&image, WHITE, &options);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 9);
        assert_eq!(
            regions[0].bounds(),
            Some((Point::new(1, 1), Point::new(3, 3)))
        );
    }

    #[test]
    fn test_seed_is_first_point() {
        let image = image_with_blocks(5, 5, BLACK, &[(1, 1, 3, 3, WHITE)]);
        let options = GrowOptions::default().with_min_area(1);

        let regions = find_regions(&image, WHITE, &options);
        // Raster scan reaches the block's top-left corner first
        assert_eq!(regions[0].points()[0], Point::new(1, 1));
    }

    #[test]
    fn test_min_area_filter() {
        // A 2x2 blob below the minimum is absent from the results
        let image = image_with_blocks(10, 10, BLACK, &[(4, 4, 2, 2, WHITE)]);
        let options = GrowOptions::default().with_min_area(5);
        assert!(find_regions(&image, WHITE, &options).is_empty());

        let options = options.with_min_area(4);
        assert_eq!(find_regions(&image, WHITE, &options).len(), 1);
    }

    #[test]
    fn test_no_duplicate_points() {
        let image = image_with_blocks(8, 8, BLACK, &[(0, 0, 8, 8, WHITE)]);
        let options = GrowOptions::default().with_min_area(1);

        let regions = find_regions(&image, WHITE, &options);
        assert_eq!(regions.len(), 1);
        let unique: HashSet<Point> = regions[0].iter().copied().collect();
        assert_eq!(unique.len(), regions[0].len());
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn test_diagonal_chain_connectivity() {
        // Pixels along the main diagonal touch only at corners
        let mut rm = Raster::filled(6, 6, BLACK).to_mut();
        for i in 0..6 {
            rm.set_unchecked(i, i, WHITE);
        }
        let image: Raster = rm.into();

        let eight = GrowOptions::default().with_min_area(1);
        let regions = find_regions(&image, WHITE, &eight);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 6);

        let four = eight.with_connectivity(Connectivity::FourWay);
        let regions = find_regions(&image, WHITE, &four);
        assert_eq!(regions.len(), 6);
    }

    #[test]
    fn test_threshold_admits_near_colors() {
        // Two shades within the threshold form one region
        let near = compose_rgb(245, 245, 250);
        let image = image_with_blocks(
            6,
            3,
            BLACK,
            &[(0, 0, 3, 3, WHITE), (3, 0, 3, 3, near)],
        );
        let options = GrowOptions::default().with_min_area(1);

        let regions = find_regions(&image, WHITE, &options);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 18);
    }

    #[test]
    fn test_zero_area_image() {
        let image = Raster::new(0, 0);
        let options = GrowOptions::default();
        assert!(find_regions(&image, WHITE, &options).is_empty());

        let image = Raster::new(5, 0);
        assert!(find_regions(&image, WHITE, &options).is_empty());
    }

    #[test]
    fn test_no_matching_pixels() {
        let image = Raster::filled(10, 10, BLACK);
        let options = GrowOptions::default().with_min_area(1);
        assert!(find_regions(&image, WHITE, &options).is_empty());
    }

    #[test]
    fn test_options_builders() {
        let options = GrowOptions::default()
            .with_max_diff(10)
            .with_min_area(3)
            .with_connectivity(Connectivity::FourWay);
        assert_eq!(options.max_diff, 10);
        assert_eq!(options.min_area, 3);
        assert_eq!(options.connectivity, Connectivity::FourWay);
    }
}
