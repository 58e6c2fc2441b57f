// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-driven selection.
//!
//! A tab switcher with an injected router link handles simulated tab-bar
//! clicks: each switch finalizes immediately and the router is told about
//! it so it can update its own chain and history bookkeeping. Because a
//! router is present, the container mounts with nothing selected — the
//! router, not the mount policy, owns the initial state.
//!
//! Run:
//! - `cargo run -p switchyard_demos --example tab_bar_click`

use async_trait::async_trait;
use futures::executor::block_on;
use switchyard_outlet::events::{NavChange, RouterLink};
use switchyard_outlet::ids::IdAllocator;
use switchyard_outlet::tabs::{Tab, Tabs, TabTarget};

struct ChattyRouter;

#[async_trait(?Send)]
impl RouterLink for ChattyRouter {
    async fn nav_changed(&mut self, change: NavChange) {
        println!("router: selection changed by the user (back = {})", change.back);
    }
}

fn main() {
    let mut ids = IdAllocator::new();
    let mut tabs: Tabs<u32> = Tabs::new(&mut ids).with_router(Box::new(ChattyRouter));
    tabs.add_tab(Tab::new("inbox"));
    tabs.add_tab(Tab::new("archive"));
    tabs.add_tab(Tab::new("trash").disabled());

    block_on(async {
        use switchyard_nav::outlet::NavOutlet;

        tabs.ready().await.unwrap();
        println!("mounted; selected = {:?}", tabs.route_id().map(|r| r.id));

        println!("== Clicking the inbox tab ==");
        let changed = tabs.select(TabTarget::Id("inbox")).await.unwrap();
        println!("changed = {changed}, selected = {:?}", tabs.route_id().map(|r| r.id));

        println!("== Clicking the archive tab ==");
        let changed = tabs.select(TabTarget::Id("archive")).await.unwrap();
        println!("changed = {changed}, selected = {:?}", tabs.route_id().map(|r| r.id));

        println!("== Clicking it again (no-op) ==");
        let changed = tabs.select(TabTarget::Id("archive")).await.unwrap();
        println!("changed = {changed}");
    });
}
