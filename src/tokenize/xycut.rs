//! Cut primitives: occupancy profiles, gap search, and set splitting.
//!
//! A cut works on a region given as a set of indices into a shared element
//! rectangle table. Projecting every rectangle onto the cut axis gives a 1-D
//! occupancy profile; the whitespace between covered runs is where a region
//! may be split.

use crate::geometry::{Axis, Rectangle, COORD_TOLERANCE};

/// A whitespace lane between two covered runs of the occupancy profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Start coordinate of the lane
    pub start: f32,
    /// End coordinate of the lane
    pub end: f32,
}

impl Gap {
    /// Width of the lane.
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Midpoint of the lane, where the split happens.
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Find the widest whitespace gap wider than `min_gap` in the occupancy
/// profile of the region along `axis`. Among gaps of equal width (within
/// the coordinate tolerance) the one nearest the region's geometric center
/// wins, which keeps the cut stable under floating jitter.
///
/// Degenerate rectangles contribute nothing to the profile.
pub fn find_gap(items: &[usize], rects: &[Rectangle], axis: Axis, min_gap: f32) -> Option<Gap> {
    let mut spans: Vec<(f32, f32)> = items
        .iter()
        .map(|&i| &rects[i])
        .filter(|r| !r.is_degenerate())
        .map(|r| r.span(axis))
        .collect();
    if spans.len() < 2 {
        return None;
    }
    spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let region_start = spans[0].0;
    let region_end = spans
        .iter()
        .map(|s| s.1)
        .fold(f32::NEG_INFINITY, f32::max);
    let region_center = (region_start + region_end) / 2.0;

    let mut best: Option<Gap> = None;
    let mut best_center_dist = f32::MAX;
    let mut cover_end = spans[0].1;

    for &(start, end) in &spans[1..] {
        if start - cover_end > min_gap {
            let gap = Gap {
                start: cover_end,
                end: start,
            };
            let center_dist = (gap.midpoint() - region_center).abs();
            let wider = match best {
                Some(b) => gap.width() > b.width() + COORD_TOLERANCE,
                None => true,
            };
            let tied = best
                .map(|b| (gap.width() - b.width()).abs() <= COORD_TOLERANCE)
                .unwrap_or(false);
            if wider || (tied && center_dist < best_center_dist) {
                best = Some(gap);
                best_center_dist = center_dist;
            }
        }
        cover_end = cover_end.max(end);
    }

    best
}

/// Partition a region at a coordinate along `axis`. An element lands on the
/// side its center falls on; gap midpoints lie in empty space, so no
/// profiled element straddles the boundary.
pub fn split(
    items: &[usize],
    rects: &[Rectangle],
    axis: Axis,
    at: f32,
) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &i in items {
        if rects[i].center_along(axis) < at {
            left.push(i);
        } else {
            right.push(i);
        }
    }
    (left, right)
}
