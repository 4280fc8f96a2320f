// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way synchronization between the scroll position and the snapped row.
//!
//! The snapped row has two writers. The host scroll surface reports where
//! scrolling came to rest, which [`SnapCoordinator::on_scroll_settled`] reflects
//! into the snapped row. Application code assigns the snapped row to request a
//! programmatic seek, which [`SnapCoordinator::on_external_change`] turns into a
//! [`ScrollRequest`] for the host.
//!
//! Neither path calls the other. Instead the coordinator remembers the last
//! value it observed, so that a host echoing a settled-scroll write back as an
//! external change (or application code assigning the same row twice) is a
//! no-op rather than a feedback loop.

use crate::{Curve, Identifiable, SnapTable, Transition};

/// A row the host should scroll to, resolved against the current [`SnapTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct SeekTarget<Id> {
    /// Identity of the target row.
    pub id: Id,
    /// Snap point of the target row: the offset the viewport top should reach.
    pub offset: f64,
}

/// A scroll-target change for the host to apply.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRequest<Id> {
    /// Where to scroll. `None` when the snapped row is "none" or is not one of
    /// the current rows, in which case the host leaves its position alone.
    pub target: Option<SeekTarget<Id>>,
    /// Whether to jump or animate.
    pub transition: Transition,
}

#[derive(Clone, Debug)]
enum SyncState<T> {
    /// No snapped value has been observed yet.
    Uninitialized,
    /// `observed` is the last snapped value seen by either sync path.
    Synced { observed: Option<T> },
}

/// Keeps a snapped row and a free-floating scroll position consistent.
///
/// ```rust
/// use understory_row_snap::{
///     Identifiable, SnapCoordinator, SnapTable, Transition,
/// };
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Row(&'static str, f64);
///
/// impl Identifiable for Row {
///     type Id = &'static str;
///     fn id(&self) -> &'static str {
///         self.0
///     }
/// }
///
/// let rows = [Row("a", 50.0), Row("b", 30.0), Row("c", 70.0)];
/// let table = SnapTable::build(&rows, 10.0, &|r: &Row| r.1);
/// let mut coordinator = SnapCoordinator::new();
///
/// // The first observation seeds the position without motion.
/// let seed = coordinator.on_external_change(&table, Some(rows[0].clone())).unwrap();
/// assert_eq!(seed.transition, Transition::Immediate);
///
/// // Later assignments animate.
/// let seek = coordinator.on_external_change(&table, Some(rows[2].clone())).unwrap();
/// assert!(seek.transition.is_animated());
/// assert_eq!(seek.target.unwrap().offset, 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct SnapCoordinator<T> {
    snapped: Option<T>,
    state: SyncState<T>,
    curve: Curve,
}

impl<T> Default for SnapCoordinator<T>
where
    T: Identifiable + PartialEq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapCoordinator<T>
where
    T: Identifiable + PartialEq + Clone,
{
    /// Creates an uninitialized coordinator that animates seeks with the default curve.
    #[must_use]
    pub fn new() -> Self {
        Self::with_curve(Curve::default())
    }

    /// Creates an uninitialized coordinator that animates seeks with `curve`.
    #[must_use]
    pub fn with_curve(curve: Curve) -> Self {
        Self {
            snapped: None,
            state: SyncState::Uninitialized,
            curve,
        }
    }

    /// Curve used for animated seeks.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Sets the curve used for subsequent animated seeks.
    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
    }

    /// The row currently aligned with the viewport top, if any.
    #[must_use]
    pub const fn snapped_item(&self) -> Option<&T> {
        self.snapped.as_ref()
    }

    /// Returns `true` once any snapped value has been observed.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        matches!(self.state, SyncState::Synced { .. })
    }

    /// Reflects a settled scroll position into the snapped row.
    ///
    /// `settled` is the identity the host resolved the resting offset to. The
    /// snapped row becomes the last row in `rows` with that identity, or `None`
    /// if no row matches. This never produces a seek, and a later
    /// [`SnapCoordinator::on_external_change`] with the same value is a no-op.
    pub fn on_scroll_settled(&mut self, rows: &[T], settled: Option<&T::Id>) -> Option<&T> {
        let item = settled.and_then(|id| rows.iter().rev().find(|row| row.id() == *id));
        snap_trace!(?settled, found = item.is_some(), "scroll settled");

        self.state = SyncState::Synced {
            observed: item.cloned(),
        };
        self.snapped = item.cloned();
        self.snapped.as_ref()
    }

    /// Observes an assignment of the snapped row by application code.
    ///
    /// Returns `None` when `item` equals the previously observed value.
    /// Otherwise returns the seek the host should perform: immediate for the
    /// very first observation, animated with [`SnapCoordinator::curve`] after
    /// that. Rows missing from `table` produce a request with no target.
    pub fn on_external_change(
        &mut self,
        table: &SnapTable<T::Id>,
        item: Option<T>,
    ) -> Option<ScrollRequest<T::Id>> {
        let transition = match &self.state {
            SyncState::Synced { observed } if *observed == item => return None,
            SyncState::Synced { .. } => Transition::Animated(self.curve),
            SyncState::Uninitialized => Transition::Immediate,
        };

        let target = item.as_ref().and_then(|row| {
            let id = row.id();
            table
                .offset_of(&id)
                .map(|offset| SeekTarget { id, offset })
        });
        snap_debug!(?target, ?transition, "programmatic seek");

        self.state = SyncState::Synced {
            observed: item.clone(),
        };
        self.snapped = item;
        Some(ScrollRequest { target, transition })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ScrollRequest, SeekTarget, SnapCoordinator};
    use crate::{Curve, Identifiable, SnapTable, Transition};

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: char,
        height: f64,
        label: &'static str,
    }

    impl Identifiable for Row {
        type Id = char;

        fn id(&self) -> char {
            self.id
        }
    }

    fn row(id: char, height: f64) -> Row {
        Row {
            id,
            height,
            label: "",
        }
    }

    fn fixture() -> (Vec<Row>, SnapTable<char>) {
        let rows = alloc::vec![row('a', 50.0), row('b', 30.0), row('c', 70.0)];
        let table = SnapTable::build(&rows, 10.0, &|r: &Row| r.height);
        (rows, table)
    }

    #[test]
    fn first_observation_is_immediate_then_animated() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();
        assert!(!coordinator.is_synced());

        let seed = coordinator.on_external_change(&table, Some(rows[1].clone()));
        assert_eq!(
            seed,
            Some(ScrollRequest {
                target: Some(SeekTarget {
                    id: 'b',
                    offset: 60.0
                }),
                transition: Transition::Immediate,
            })
        );
        assert!(coordinator.is_synced());

        let seek = coordinator.on_external_change(&table, Some(rows[2].clone()));
        assert_eq!(
            seek.map(|r| r.transition),
            Some(Transition::Animated(Curve::EaseInOut))
        );
    }

    #[test]
    fn first_observation_of_none_still_seeds() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();

        let seed = coordinator.on_external_change(&table, None);
        assert_eq!(
            seed,
            Some(ScrollRequest {
                target: None,
                transition: Transition::Immediate,
            })
        );
        assert_eq!(coordinator.on_external_change(&table, None), None);

        // Moving off "none" afterwards animates.
        let seek = coordinator.on_external_change(&table, Some(rows[0].clone()));
        assert!(seek.is_some_and(|r| r.transition.is_animated()));
    }

    #[test]
    fn repeated_assignment_is_a_no_op() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();
        let _ = coordinator.on_external_change(&table, Some(rows[0].clone()));

        let first = coordinator.on_external_change(&table, Some(rows[2].clone()));
        assert!(first.is_some());
        let second = coordinator.on_external_change(&table, Some(rows[2].clone()));
        assert_eq!(second, None);
        assert_eq!(coordinator.snapped_item(), Some(&rows[2]));
    }

    #[test]
    fn settled_scroll_does_not_echo_into_a_seek() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();
        let _ = coordinator.on_external_change(&table, Some(rows[0].clone()));

        let snapped = coordinator.on_scroll_settled(&rows, Some(&'b')).cloned();
        assert_eq!(snapped.as_ref(), Some(&rows[1]));

        // The host reports the write back as an external change.
        assert_eq!(coordinator.on_external_change(&table, snapped), None);
    }

    #[test]
    fn settled_scroll_before_any_seed_marks_synced() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();

        let _ = coordinator.on_scroll_settled(&rows, Some(&'a'));
        assert!(coordinator.is_synced());

        let seek = coordinator.on_external_change(&table, Some(rows[2].clone()));
        assert!(seek.is_some_and(|r| r.transition.is_animated()));
    }

    #[test]
    fn settled_scroll_prefers_the_last_matching_row() {
        let rows = alloc::vec![
            Row {
                id: 'x',
                height: 10.0,
                label: "stale",
            },
            Row {
                id: 'x',
                height: 10.0,
                label: "fresh",
            },
        ];
        let mut coordinator = SnapCoordinator::new();
        let snapped = coordinator.on_scroll_settled(&rows, Some(&'x'));
        assert_eq!(snapped.map(|r| r.label), Some("fresh"));
    }

    #[test]
    fn unmatched_settle_clears_the_snapped_row() {
        let (rows, _) = fixture();
        let mut coordinator = SnapCoordinator::new();
        let _ = coordinator.on_scroll_settled(&rows, Some(&'a'));

        assert_eq!(coordinator.on_scroll_settled(&rows, Some(&'z')), None);
        assert_eq!(coordinator.snapped_item(), None);

        let _ = coordinator.on_scroll_settled(&rows, Some(&'a'));
        assert_eq!(coordinator.on_scroll_settled(&rows, None), None);
    }

    #[test]
    fn seek_to_a_missing_row_has_no_target() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::new();
        let _ = coordinator.on_external_change(&table, Some(rows[0].clone()));

        let request = coordinator.on_external_change(&table, Some(row('q', 5.0)));
        assert_eq!(
            request,
            Some(ScrollRequest {
                target: None,
                transition: Transition::Animated(Curve::EaseInOut),
            })
        );
    }

    #[test]
    fn curve_is_configurable() {
        let (rows, table) = fixture();
        let mut coordinator = SnapCoordinator::with_curve(Curve::Linear);
        let _ = coordinator.on_external_change(&table, Some(rows[0].clone()));
        coordinator.set_curve(Curve::SmoothStep);

        let seek = coordinator.on_external_change(&table, Some(rows[1].clone()));
        assert_eq!(
            seek.map(|r| r.transition),
            Some(Transition::Animated(Curve::SmoothStep))
        );
    }
}
