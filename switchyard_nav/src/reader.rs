// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route-chain reader: serialize displayed state back into a chain.
//!
//! ## Overview
//!
//! Walks the live outlet tree from a starting element, seeking into active
//! children: locate the nearest outlet, record its active segment, continue
//! from its active child container. Synchronous and read-only — no outlet
//! state is mutated.
//!
//! The walk terminates when no outlet is found, when an outlet reports no
//! active route, or when an active outlet exposes no child container. The
//! deepest outlet encountered is returned as the *pivot*, for callers that
//! need to act directly on the active leaf outlet (e.g. to push a new
//! segment below it).

use crate::locator::find_outlet;
use crate::outlet::OutletHost;
use crate::types::NavState;

/// Read the active route chain under `root`.
pub fn read_nav_state<H: OutletHost>(host: &H, root: H::Key) -> NavState<H::Key> {
    let mut ids = Vec::new();
    let mut pivot = None;
    let mut at = root;
    loop {
        let Some(key) = find_outlet(host, at) else {
            break;
        };
        pivot = Some(key);
        let Some(outlet) = host.outlet(key) else {
            break;
        };
        let Some(id) = outlet.route_id() else {
            break;
        };
        ids.push(id);
        let Some(next) = outlet.container() else {
            break;
        };
        at = next;
    }
    NavState { ids, pivot }
}
