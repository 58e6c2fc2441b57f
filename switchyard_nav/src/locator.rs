// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-outlet search.
//!
//! ## Overview
//!
//! Finds the nearest element (the root itself included) that carries the
//! outlet capability, searching the root first and then its descendants in
//! document order. First match wins, and the search never descends *into* a
//! match: an outlet nested within another outlet is a later recursion
//! concern, triggered after this search, not during it.
//!
//! Side-effect-free, synchronous, deterministic.

use crate::outlet::OutletHost;

/// Return the nearest outlet-capable element at or under `root`.
pub fn find_outlet<H: OutletHost>(host: &H, root: H::Key) -> Option<H::Key> {
    if host.outlet(root).is_some() {
        return Some(root);
    }
    find_in_children(host, root)
}

fn find_in_children<H: OutletHost>(host: &H, of: H::Key) -> Option<H::Key> {
    for &child in host.children(of) {
        if host.outlet(child).is_some() {
            // First match in document order; do not search inside it.
            return Some(child);
        }
        if let Some(found) = find_in_children(host, child) {
            return Some(found);
        }
    }
    None
}
