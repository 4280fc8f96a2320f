// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A snapping row list: rows, layout options, snap table and coordinator in one place.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    Identifiable, RowSnapConfig, ScrollRequest, ScrollTarget, ScrollTargetBehavior,
    SnapCoordinator, SnapTable,
};

/// Row data and snapping state for one vertically scrolling list.
///
/// The host scroll surface drives this type from its event loop:
///
/// - at the end of a user gesture, pass the provisional target to
///   [`RowSnapScroll::update_target`] and scroll to what it leaves behind;
/// - when scrolling settles, report the resting row with
///   [`RowSnapScroll::on_scroll_settled`] (or the raw offset with
///   [`RowSnapScroll::on_offset_settled`]);
/// - when application code assigns the current row, call
///   [`RowSnapScroll::set_snapped_item`] and apply the returned
///   [`ScrollRequest`], if any.
///
/// The snap table is rebuilt whenever rows or spacing change. Hosts whose row
/// heights change without the rows themselves changing (for example after
/// text reflow) call [`RowSnapScroll::invalidate_heights`].
pub struct RowSnapScroll<T: Identifiable, H> {
    rows: Vec<T>,
    config: RowSnapConfig,
    height: H,
    table: SnapTable<T::Id>,
    coordinator: SnapCoordinator<T>,
}

impl<T, H> fmt::Debug for RowSnapScroll<T, H>
where
    T: Identifiable + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSnapScroll")
            .field("rows", &self.rows)
            .field("config", &self.config)
            .field("table", &self.table)
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}

impl<T, H> RowSnapScroll<T, H>
where
    T: Identifiable + PartialEq + Clone,
    H: Fn(&T) -> f64,
{
    /// Creates a list over `rows`, measuring each row with `height`.
    ///
    /// No row is snapped until the host reports a settled position or the
    /// application assigns one.
    pub fn new(rows: Vec<T>, config: RowSnapConfig, height: H) -> Self {
        let config = config.sanitized();
        let table = SnapTable::build(&rows, config.spacing, &height);
        Self {
            rows,
            config,
            height,
            table,
            coordinator: SnapCoordinator::with_curve(config.seek_curve),
        }
    }

    /// The rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> RowSnapConfig {
        self.config
    }

    /// The current snap table.
    #[must_use]
    pub const fn table(&self) -> &SnapTable<T::Id> {
        &self.table
    }

    /// The row currently aligned with the viewport top, if any.
    #[must_use]
    pub const fn snapped_item(&self) -> Option<&T> {
        self.coordinator.snapped_item()
    }

    /// Total scrollable extent, including padding on both ends.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.table.content_extent(self.config.padding)
    }

    /// Replaces the rows and rebuilds the snap table.
    ///
    /// The snapped row is left as is; the next settle reconciles it.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.rebuild();
    }

    /// Replaces the configuration, rebuilding the snap table if spacing changed.
    pub fn set_config(&mut self, config: RowSnapConfig) {
        let config = config.sanitized();
        let spacing_changed = config.spacing != self.config.spacing;
        self.config = config;
        self.coordinator.set_curve(config.seek_curve);
        if spacing_changed {
            self.rebuild();
        }
    }

    /// Re-measures every row and rebuilds the snap table.
    pub fn invalidate_heights(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.table = SnapTable::build(&self.rows, self.config.spacing, &self.height);
    }

    /// Reflects the row the host resolved a settled offset to.
    pub fn on_scroll_settled(&mut self, settled: Option<&T::Id>) -> Option<&T> {
        self.coordinator.on_scroll_settled(&self.rows, settled)
    }

    /// Reflects a settled offset, resolving it to a row through the snap table.
    pub fn on_offset_settled(&mut self, offset: f64) -> Option<&T> {
        let settled = self.table.row_id_at_offset(offset).cloned();
        self.coordinator.on_scroll_settled(&self.rows, settled.as_ref())
    }

    /// Assigns the snapped row on behalf of application code.
    ///
    /// See [`SnapCoordinator::on_external_change`].
    pub fn set_snapped_item(&mut self, item: Option<T>) -> Option<ScrollRequest<T::Id>> {
        self.coordinator.on_external_change(&self.table, item)
    }
}

/// Rewrites a gesture's provisional target onto the nearest snap point,
/// leaving it alone when there are no rows.
impl<T, H> ScrollTargetBehavior for RowSnapScroll<T, H>
where
    T: Identifiable,
{
    fn update_target(&self, target: &mut ScrollTarget) {
        self.table.update_target(target);
    }
}
