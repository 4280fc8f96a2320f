// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll targets and the rule that rewrites them onto snap points.

use kurbo::{Rect, Size};

use crate::SnapTable;

/// The provisional resting place of a scroll gesture.
///
/// `rect` is the viewport rectangle in content coordinates at the end of the
/// gesture: its top edge (`y0`) is the vertical scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    /// Proposed viewport rectangle in content coordinates.
    pub rect: Rect,
}

impl ScrollTarget {
    /// Creates a target from a viewport rectangle.
    #[must_use]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Creates a target whose viewport of `viewport` size starts at vertical offset `y`.
    #[must_use]
    pub fn at_offset(y: f64, viewport: Size) -> Self {
        Self::new(Rect::from_origin_size((0.0, y), viewport))
    }

    /// The vertical scroll offset this target would settle at.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.rect.y0
    }

    /// Moves the target vertically so it settles at `y`, keeping its height.
    pub fn set_offset(&mut self, y: f64) {
        let height = self.rect.y1 - self.rect.y0;
        self.rect.y0 = y;
        self.rect.y1 = y + height;
    }
}

/// A rule that adjusts where a scroll gesture comes to rest.
///
/// Host scroll surfaces call [`ScrollTargetBehavior::update_target`] once per
/// gesture, with the provisional terminal target computed by their own
/// velocity and deceleration model, and then animate towards whatever target
/// is left behind.
pub trait ScrollTargetBehavior {
    /// Rewrites `target` in place.
    fn update_target(&self, target: &mut ScrollTarget);
}

/// Picks the snap point nearest to `y` from `points`, which must be sorted.
///
/// With `lower` the greatest point `<= y` and `higher` the least point `> y`,
/// `lower` wins only when strictly closer; an exact tie goes to `higher`.
/// Offsets outside the table snap to the nearest end. Returns `None` when
/// there are no points (or `y` is NaN), meaning the target stays unchanged.
///
/// ```rust
/// use understory_row_snap::nearest_snap_point;
///
/// let points = [0.0, 60.0, 100.0];
/// assert_eq!(nearest_snap_point(&points, 55.0), Some(60.0));
/// assert_eq!(nearest_snap_point(&points, 80.0), Some(100.0));
/// assert_eq!(nearest_snap_point(&[], 80.0), None);
/// ```
#[must_use]
pub fn nearest_snap_point(points: &[f64], y: f64) -> Option<f64> {
    if y.is_nan() {
        return None;
    }
    let split = points.partition_point(|p| *p <= y);
    let lower = split.checked_sub(1).and_then(|i| points.get(i).copied());
    let higher = points.get(split).copied();

    match (lower, higher) {
        (Some(lower), Some(higher)) => {
            if y - lower < higher - y {
                Some(lower)
            } else {
                Some(higher)
            }
        }
        (Some(lower), None) => Some(lower),
        (None, Some(higher)) => Some(higher),
        (None, None) => None,
    }
}

impl<Id> ScrollTargetBehavior for SnapTable<Id>
where
    Id: Clone + Eq + core::hash::Hash,
{
    fn update_target(&self, target: &mut ScrollTarget) {
        let proposed = target.offset();
        if let Some(snapped) = nearest_snap_point(self.points(), proposed) {
            snap_trace!(proposed, snapped, "rewrote scroll target");
            target.set_offset(snapped);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ScrollTarget, ScrollTargetBehavior, nearest_snap_point};
    use crate::SnapTable;

    const POINTS: [f64; 3] = [0.0, 60.0, 100.0];

    #[test]
    fn picks_the_strictly_closer_neighbour() {
        assert_eq!(nearest_snap_point(&POINTS, 55.0), Some(60.0));
        assert_eq!(nearest_snap_point(&POINTS, 29.0), Some(0.0));
        assert_eq!(nearest_snap_point(&POINTS, 79.0), Some(60.0));
        assert_eq!(nearest_snap_point(&POINTS, 81.0), Some(100.0));
    }

    #[test]
    fn exact_midpoint_goes_to_the_higher_point() {
        assert_eq!(nearest_snap_point(&POINTS, 30.0), Some(60.0));
        assert_eq!(nearest_snap_point(&POINTS, 80.0), Some(100.0));
    }

    #[test]
    fn exact_hits_stay_put() {
        for p in POINTS {
            assert_eq!(nearest_snap_point(&POINTS, p), Some(p));
        }
    }

    #[test]
    fn out_of_range_offsets_snap_to_the_ends() {
        assert_eq!(nearest_snap_point(&POINTS, -40.0), Some(0.0));
        assert_eq!(nearest_snap_point(&POINTS, 1_000.0), Some(100.0));
    }

    #[test]
    fn empty_table_leaves_offset_alone() {
        assert_eq!(nearest_snap_point(&[], 42.0), None);

        let table = SnapTable::<u32>::empty();
        let mut target = ScrollTarget::at_offset(42.0, Size::new(320.0, 480.0));
        table.update_target(&mut target);
        assert_eq!(target.offset(), 42.0);
    }

    #[test]
    fn duplicate_points_resolve_like_distinct_ones() {
        let points = [0.0, 0.0, 10.0, 10.0];
        assert_eq!(nearest_snap_point(&points, 4.0), Some(0.0));
        assert_eq!(nearest_snap_point(&points, 5.0), Some(10.0));
        assert_eq!(nearest_snap_point(&points, 10.0), Some(10.0));
    }

    #[test]
    fn set_offset_preserves_viewport_height() {
        let mut target = ScrollTarget::new(Rect::new(0.0, 55.0, 320.0, 535.0));
        target.set_offset(60.0);
        assert_eq!(target.rect, Rect::new(0.0, 60.0, 320.0, 540.0));
    }
}
