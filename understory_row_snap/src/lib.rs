// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_row_snap --heading-base-level=0

//! Understory Row Snap: top-edge snapping for vertically scrolling row lists.
//!
//! This crate makes a list of variable-height rows come to rest with the top
//! edge of some row exactly at the viewport top, and keeps a two-way "snapped
//! row" value in sync with the scroll position. It is renderer-agnostic: the
//! host owns the scroll surface, its velocity model, and the views.
//!
//! The core concepts are:
//!
//! - [`snap_points`] / [`SnapTable`]: one snap point per row, the running sum of
//!   row heights plus spacing before that row. Tables are snapshots and are
//!   rebuilt, never patched, when rows, spacing, or heights change.
//! - [`nearest_snap_point`] and the [`ScrollTargetBehavior`] seam: rewrite a
//!   gesture's provisional [`ScrollTarget`] onto the nearest snap point. Ties go
//!   to the later point.
//! - [`SnapCoordinator`]: reflects settled scroll positions into the snapped
//!   row, and turns application assignments of the snapped row into
//!   [`ScrollRequest`]s. The first assignment is applied without animation,
//!   later ones with a [`Transition::Animated`] [`Curve`], and repeated
//!   assignments of the same row are ignored.
//! - [`RowSnapScroll`]: rows, [`RowSnapConfig`], height function, table, and
//!   coordinator bundled into the surface a host drives.
//!
//! This crate deliberately does **not** know about widgets, display trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Laying out rows with the configured spacing and padding.
//! - Calling [`ScrollTargetBehavior::update_target`] at the end of each gesture.
//! - Reporting settled positions and applying returned [`ScrollRequest`]s,
//!   animating them when asked to.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_row_snap::{
//!     Identifiable, RowSnapConfig, RowSnapScroll, ScrollTarget, ScrollTargetBehavior,
//! };
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Message {
//!     id: u64,
//!     lines: u32,
//! }
//!
//! impl Identifiable for Message {
//!     type Id = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let messages = vec![
//!     Message { id: 1, lines: 2 },
//!     Message { id: 2, lines: 1 },
//!     Message { id: 3, lines: 4 },
//! ];
//! let mut list = RowSnapScroll::new(messages, RowSnapConfig::default(), |m: &Message| {
//!     f64::from(m.lines) * 20.0
//! });
//! assert_eq!(list.table().points(), &[0.0, 50.0, 80.0]);
//!
//! // A fling that would stop at 70 is pulled onto the third row.
//! let mut target = ScrollTarget::at_offset(70.0, Size::new(300.0, 200.0));
//! list.update_target(&mut target);
//! assert_eq!(target.offset(), 80.0);
//!
//! // Once the host settles there, the third row is snapped.
//! let snapped = list.on_offset_settled(target.offset());
//! assert_eq!(snapped.map(|m| m.id), Some(3));
//! ```
//!
//! All offsets and extents are `f64` logical units, and are expected to be
//! finite and non-negative.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `tracing` feature to
//! emit trace and debug events under the `understory_row_snap` target.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod config;
mod coordinator;
mod row;
mod table;
mod target;
mod transition;
mod view;

pub use config::{DEFAULT_PADDING, DEFAULT_SPACING, RowSnapConfig};
pub use coordinator::{ScrollRequest, SeekTarget, SnapCoordinator};
pub use row::Identifiable;
pub use table::{SnapTable, snap_points};
pub use target::{ScrollTarget, ScrollTargetBehavior, nearest_snap_point};
pub use transition::{Curve, Transition};
pub use view::RowSnapScroll;
