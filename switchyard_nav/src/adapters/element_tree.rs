// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for the Switchyard element arena.
//!
//! ## Feature
//!
//! Enable with `tree_adapter`.
//!
//! ## Notes
//!
//! [`ElementHost`] pairs a [`switchyard_tree::Tree`] with the outlet
//! instances attached to its elements. The tree supplies document order;
//! outlet capability is whatever has been attached — the walk dispatches
//! through the [`NavOutlet`] interface and never inspects element kinds.

use std::collections::HashMap;

use switchyard_tree::{ElementId, Tree};

use crate::outlet::{NavOutlet, OutletHost};

/// A host combining an element tree with attached outlet capabilities.
///
/// The host owns both halves: element lifetimes are managed through
/// [`ElementHost::tree_mut`], and containers are registered per element via
/// [`ElementHost::attach_outlet`]. Detaching an element does not detach its
/// outlet; hosts that remove subtrees should detach explicitly.
#[derive(Default)]
pub struct ElementHost {
    tree: Tree,
    outlets: HashMap<ElementId, Box<dyn NavOutlet<ElementId>>>,
}

impl core::fmt::Debug for ElementHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementHost")
            .field("tree", &self.tree)
            .field("outlets", &self.outlets.len())
            .finish()
    }
}

impl ElementHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying element tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to the underlying element tree.
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Attach (or replace) the outlet capability at `at`.
    pub fn attach_outlet(&mut self, at: ElementId, outlet: Box<dyn NavOutlet<ElementId>>) {
        self.outlets.insert(at, outlet);
    }

    /// Detach the outlet capability at `at`, returning it if present.
    pub fn detach_outlet(&mut self, at: ElementId) -> Option<Box<dyn NavOutlet<ElementId>>> {
        self.outlets.remove(&at)
    }
}

impl OutletHost for ElementHost {
    type Key = ElementId;

    fn children(&self, of: ElementId) -> &[ElementId] {
        self.tree.children(of)
    }

    fn outlet(&self, at: ElementId) -> Option<&dyn NavOutlet<ElementId>> {
        self.outlets.get(&at).map(|o| o.as_ref())
    }

    fn outlet_mut(&mut self, at: ElementId) -> Option<&mut dyn NavOutlet<ElementId>> {
        self.outlets
            .get_mut(&at)
            .map(|o| &mut **o as &mut dyn NavOutlet<ElementId>)
    }
}
