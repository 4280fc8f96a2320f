// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row identity.

use core::fmt::Debug;
use core::hash::Hash;

/// A row with a stable identity.
///
/// Rows are owned by the host and supplied as an ordered slice. The identity is
/// what the host scroll surface reports when it resolves a settled offset to a
/// row, and what programmatic seeks target. Identities are expected to be unique;
/// when they are not, lookups resolve to the *last* row carrying the identity.
pub trait Identifiable {
    /// Identity type. Compared by value.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns this row's identity.
    fn id(&self) -> Self::Id;
}
