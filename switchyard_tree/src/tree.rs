// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core arena implementation: structure, updates, traversal.

use alloc::vec::Vec;

use crate::types::{ElementFlags, ElementId};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level element tree.
///
/// Elements are stored in generational slots; children keep insertion order,
/// which is the document order used by traversal.
pub struct Tree {
    elements: Vec<Option<Element>>, // slots
    generations: Vec<u32>,          // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.elements.len();
        let alive = self.elements.iter().filter(|e| e.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("elements_total", &total)
            .field("elements_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    flags: ElementFlags,
}

impl Element {
    fn new(generation: u32, flags: ElementFlags) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            flags,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<ElementId>, flags: ElementFlags) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.elements[idx] = Some(Element::new(generation, flags));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.elements.push(Some(Element::new(generation, flags)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.elements.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove an element (and its subtree) from the tree.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        // Detach from parent first
        if let Some(parent) = self.element(id).parent {
            self.unlink_parent(id, parent);
        }
        // Depth-first remove children
        let children = self.element(id).children.clone();
        for child in children {
            self.remove(child);
        }
        // Free slot
        self.elements[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent`, appending it as the last child.
    pub fn reparent(&mut self, id: ElementId, new_parent: Option<ElementId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.element(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(el) = self.element_opt_mut(id) {
            el.flags = flags;
        }
    }

    /// Current flags, if the element is alive.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.element_opt(id).map(|e| e.flags)
    }

    /// Parent of `id`, or `None` for roots and stale ids.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element_opt(id).and_then(|e| e.parent)
    }

    /// Children of `id` in document order. Empty for stale ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element_opt(id).map_or(&[], |e| &e.children)
    }

    /// Whether `id` still refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.element_opt(id).is_some()
    }

    /// Iterate the subtree rooted at `id` in document order (preorder,
    /// the root itself first). Empty for stale ids.
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.is_alive(id) {
            stack.push(id);
        }
        Descendants { tree: self, stack }
    }

    // --- internals ---

    fn element(&self, id: ElementId) -> &Element {
        self.elements[id.idx()].as_ref().expect("dangling ElementId")
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn element_opt(&self, id: ElementId) -> Option<&Element> {
        let e = self.elements.get(id.idx())?.as_ref()?;
        if e.generation != id.1 {
            return None;
        }
        Some(e)
    }

    fn element_opt_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let e = self.elements.get_mut(id.idx())?.as_mut()?;
        if e.generation != id.1 {
            return None;
        }
        Some(e)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        let parent_el = self.element_mut(parent);
        parent_el.children.push(id);
        self.element_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        let p = self.element_mut(parent);
        p.children.retain(|c| *c != id);
        self.element_mut(id).parent = None;
    }
}

/// Document-order traversal over a subtree.
///
/// Returned by [`Tree::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let next = self.stack.pop()?;
        // Children are pushed in reverse so the first child is popped next.
        for &child in self.tree.children(next).iter().rev() {
            self.stack.push(child);
        }
        Some(next)
    }
}
