// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested tabs basics.
//!
//! Builds two nested tab switchers over an element tree, applies a route
//! chain through them, and reads the displayed state back out.
//!
//! Run:
//! - `cargo run -p switchyard_demos --example nested_tabs`

use futures::executor::block_on;
use switchyard_nav::adapters::element_tree::ElementHost;
use switchyard_nav::reader::read_nav_state;
use switchyard_nav::types::{Direction, RouteId};
use switchyard_nav::writer::write_nav_state;
use switchyard_outlet::events::NullRouterLink;
use switchyard_outlet::ids::IdAllocator;
use switchyard_outlet::tabs::{Tab, Tabs};
use switchyard_tree::ElementFlags;

fn main() {
    let mut host = ElementHost::new();
    let mut ids = IdAllocator::new();

    // root → outer tabs ("library" / "settings"); inside the library pane
    // lives another switcher ("albums" / "artists").
    let root = host.tree_mut().insert(None, ElementFlags::default());
    let outer_el = host.tree_mut().insert(Some(root), ElementFlags::default());
    let library_pane = host.tree_mut().insert(Some(outer_el), ElementFlags::default());
    let settings_pane = host.tree_mut().insert(Some(outer_el), ElementFlags::default());
    let inner_el = host
        .tree_mut()
        .insert(Some(library_pane), ElementFlags::default());

    let mut outer = Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
    outer.add_tab(Tab::new("library").with_pane(library_pane));
    outer.add_tab(Tab::new("settings").with_pane(settings_pane));
    host.attach_outlet(outer_el, Box::new(outer));

    let mut inner: Tabs<switchyard_tree::ElementId> =
        Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
    inner.add_tab(Tab::new("albums"));
    inner.add_tab(Tab::new("artists"));
    host.attach_outlet(inner_el, Box::new(inner));

    let chain = vec![RouteId::new("library"), RouteId::new("artists")];
    println!("== Applying chain library/artists ==");
    block_on(write_nav_state(&mut host, root, &chain, 0, Direction::Forward)).unwrap();

    let state = read_nav_state(&host, root);
    let ids: Vec<_> = state.ids.iter().map(|r| r.id.as_str()).collect();
    println!("displayed chain: {}", ids.join("/"));
    println!("pivot element:   {:?}", state.pivot);
}
