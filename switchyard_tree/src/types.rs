// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element arena: element identifiers and flags.

/// Identifier for an element in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether an `ElementId` still refers to a live element.
/// Stale `ElementId`s never alias a different live element because the generation must match.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and interactivity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible (its content is shown).
        const VISIBLE = 0b0000_0001;
        /// Element is inert (present but not interactive, e.g. a pane
        /// leaving the screen while a transition settles).
        const INERT   = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}
