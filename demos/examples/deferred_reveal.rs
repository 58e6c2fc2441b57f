// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred reveal ordering.
//!
//! Three nested switchers adopt a chain top-down, but their switches
//! finalize bottom-up: the deepest container's change notification fires
//! first and the outermost fires last, so a container never becomes visible
//! while its own children are still repainting.
//!
//! Run:
//! - `cargo run -p switchyard_demos --example deferred_reveal`

use futures::executor::block_on;
use switchyard_nav::adapters::element_tree::ElementHost;
use switchyard_nav::types::{Direction, RouteId};
use switchyard_nav::writer::write_nav_state;
use switchyard_outlet::events::{NavChange, NullRouterLink, OutletObserver};
use switchyard_outlet::ids::IdAllocator;
use switchyard_outlet::tabs::{Tab, Tabs};
use switchyard_tree::ElementFlags;

struct Narrator(&'static str);

impl OutletObserver for Narrator {
    fn selection_changed(&mut self, selected: &RouteId) {
        println!("{} finalized: now showing {:?}", self.0, selected.id);
    }

    fn nav_changed(&mut self, change: NavChange) {
        println!("{} nav changed (back = {})", self.0, change.back);
    }
}

fn main() {
    let mut host = ElementHost::new();
    let mut ids = IdAllocator::new();
    let root = host.tree_mut().insert(None, ElementFlags::default());

    let mut parent = root;
    for (label, route) in [("depth-0", "a"), ("depth-1", "b"), ("depth-2", "c")] {
        let outlet_el = host.tree_mut().insert(Some(parent), ElementFlags::default());
        let pane = host.tree_mut().insert(Some(outlet_el), ElementFlags::default());
        let mut tabs = Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
        tabs.add_tab(Tab::new(route).with_pane(pane));
        tabs.observe(Box::new(Narrator(label)));
        host.attach_outlet(outlet_el, Box::new(tabs));
        parent = pane;
    }

    let chain = vec![RouteId::new("a"), RouteId::new("b"), RouteId::new("c")];
    println!("== Applying chain a/b/c (watch the finalize order) ==");
    block_on(write_nav_state(&mut host, root, &chain, 0, Direction::Forward)).unwrap();
}
