// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-point tables: where each row's top edge meets the viewport top.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::Identifiable;

/// Clamps an extent (row height, spacing, padding) to a finite, non-negative value.
///
/// Extents are expected to be finite. NaNs and infinities are caught in debug
/// builds and collapse to `0.0` otherwise, as do finite negative values.
pub(crate) fn clamp_extent(extent: f64) -> f64 {
    debug_assert!(
        extent.is_finite(),
        "row snap extents must be finite; got {extent:?}"
    );
    if extent.is_finite() && !extent.is_sign_negative() {
        extent
    } else {
        0.0
    }
}

/// Running prefix sum over `rows`, seeded at `0.0`.
///
/// Returns the points and the offset just past the last row (including its
/// trailing spacing). `height` is queried exactly once per row.
fn accumulate<T>(rows: &[T], spacing: f64, height: &dyn Fn(&T) -> f64) -> (Vec<f64>, f64) {
    let spacing = clamp_extent(spacing);
    let mut points = Vec::with_capacity(rows.len());
    let mut y = 0.0;
    for row in rows {
        points.push(y);
        y += clamp_extent(height(row)) + spacing;
    }
    (points, y)
}

/// Computes one snap point per row.
///
/// `point[0] == 0.0` and `point[i] == point[i - 1] + height(rows[i - 1]) + spacing`.
/// The result is non-decreasing, and strictly increasing when `spacing > 0`.
///
/// ```rust
/// use understory_row_snap::snap_points;
///
/// let heights = [50.0, 30.0, 70.0];
/// assert_eq!(snap_points(&heights, 10.0, &|h: &f64| *h), [0.0, 60.0, 100.0]);
/// ```
pub fn snap_points<T>(rows: &[T], spacing: f64, height: &dyn Fn(&T) -> f64) -> Vec<f64> {
    accumulate(rows, spacing, height).0
}

/// An immutable table of snap points paired with the identities of their rows.
///
/// The table is a snapshot: heights are read once at build time and never
/// patched. Any change to row order, row count, spacing, or a single row's
/// height shifts every later point, so hosts rebuild the whole table instead.
#[derive(Clone, Debug)]
pub struct SnapTable<Id> {
    points: Vec<f64>,
    ids: Vec<Id>,
    index: HashMap<Id, usize>,
    spacing: f64,
    end: f64,
}

impl<Id> SnapTable<Id>
where
    Id: Clone + Eq + core::hash::Hash,
{
    /// Creates a table with no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            ids: Vec::new(),
            index: HashMap::new(),
            spacing: 0.0,
            end: 0.0,
        }
    }

    /// Builds the table for `rows`, separated by `spacing`, using `height` for each row.
    pub fn build<T>(rows: &[T], spacing: f64, height: &dyn Fn(&T) -> f64) -> Self
    where
        T: Identifiable<Id = Id>,
    {
        let (points, end) = accumulate(rows, spacing, height);
        let ids: Vec<Id> = rows.iter().map(Identifiable::id).collect();

        let mut index = HashMap::with_capacity(ids.len());
        // Later duplicates overwrite earlier ones.
        for (i, id) in ids.iter().enumerate() {
            index.insert(id.clone(), i);
        }

        snap_debug!(rows = points.len(), end, "rebuilt snap table");
        Self {
            points,
            ids,
            index,
            spacing: clamp_extent(spacing),
            end,
        }
    }

    /// Number of rows (and snap points).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The snap points, in row order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Row identities, in row order.
    #[must_use]
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Index of the last row with identity `id`.
    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Snap point of the last row with identity `id`.
    #[must_use]
    pub fn offset_of(&self, id: &Id) -> Option<f64> {
        self.index_of(id).and_then(|i| self.points.get(i).copied())
    }

    /// Resolves a settled offset to the row whose snap point is the greatest one
    /// at or before `offset`.
    ///
    /// Offsets above the first point resolve to the first row. Returns `None`
    /// only for an empty table.
    #[must_use]
    pub fn row_at_offset(&self, offset: f64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let split = self.points.partition_point(|p| *p <= offset);
        Some(split.saturating_sub(1))
    }

    /// Identity of the row at `offset`, see [`SnapTable::row_at_offset`].
    #[must_use]
    pub fn row_id_at_offset(&self, offset: f64) -> Option<&Id> {
        self.row_at_offset(offset).and_then(|i| self.ids.get(i))
    }

    /// Total scrollable extent of the rows plus `padding` on both ends.
    ///
    /// Padding only insets the content; it never moves snap points.
    #[must_use]
    pub fn content_extent(&self, padding: f64) -> f64 {
        let rows = if self.points.is_empty() {
            0.0
        } else {
            self.end - self.spacing
        };
        rows + 2.0 * clamp_extent(padding)
    }
}
