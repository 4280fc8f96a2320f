// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options for a snapping row list.

use crate::Curve;
use crate::table::clamp_extent;

/// Default gap between adjacent rows, in logical units.
pub const DEFAULT_SPACING: f64 = 10.0;

/// Default inset around the rows, in logical units.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Layout and motion options for [`RowSnapScroll`](crate::RowSnapScroll).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSnapConfig {
    /// Gap between adjacent rows. Participates in snap-point math.
    pub spacing: f64,
    /// Inset around the whole list. Cosmetic; snap points ignore it.
    pub padding: f64,
    /// Curve used for programmatic seeks after the first one.
    pub seek_curve: Curve,
}

impl Default for RowSnapConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            padding: DEFAULT_PADDING,
            seek_curve: Curve::default(),
        }
    }
}

impl RowSnapConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gap between rows.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the inset around the list.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the curve for animated seeks.
    #[must_use]
    pub fn with_seek_curve(mut self, curve: Curve) -> Self {
        self.seek_curve = curve;
        self
    }

    /// Copy of `self` with spacing and padding clamped to finite, non-negative values.
    pub(crate) fn sanitized(self) -> Self {
        Self {
            spacing: clamp_extent(self.spacing),
            padding: clamp_extent(self.padding),
            seek_curve: self.seek_curve,
        }
    }
}
