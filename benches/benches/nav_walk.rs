// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use futures::executor::block_on;
use switchyard_nav::adapters::element_tree::ElementHost;
use switchyard_nav::locator::find_outlet;
use switchyard_nav::reader::read_nav_state;
use switchyard_nav::types::{Direction, RouteId};
use switchyard_nav::writer::write_nav_state;
use switchyard_outlet::events::NullRouterLink;
use switchyard_outlet::ids::IdAllocator;
use switchyard_outlet::tabs::{Tab, Tabs};
use switchyard_tree::{ElementFlags, ElementId};

/// `depth` nested router-driven tab switchers, each two tabs wide, with a
/// few plain spacer elements per level so the locator has to skip content.
fn build_nested(depth: usize) -> (ElementHost, ElementId) {
    let mut host = ElementHost::new();
    let mut ids = IdAllocator::new();
    let root = host.tree_mut().insert(None, ElementFlags::default());
    let mut parent = root;
    for level in 0..depth {
        for _ in 0..3 {
            let _ = host.tree_mut().insert(Some(parent), ElementFlags::default());
        }
        let outlet_el = host.tree_mut().insert(Some(parent), ElementFlags::default());
        let pane = host.tree_mut().insert(Some(outlet_el), ElementFlags::default());
        let mut tabs = Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
        tabs.add_tab(Tab::new(format!("t{level}")).with_pane(pane));
        tabs.add_tab(Tab::new(format!("alt{level}")));
        host.attach_outlet(outlet_el, Box::new(tabs));
        parent = pane;
    }
    (host, root)
}

fn chain_for(depth: usize, alt_leaf: bool) -> Vec<RouteId> {
    (0..depth)
        .map(|level| {
            if alt_leaf && level == depth - 1 {
                RouteId::new(format!("alt{level}"))
            } else {
                RouteId::new(format!("t{level}"))
            }
        })
        .collect()
}

fn bench_locator(c: &mut Criterion) {
    let mut group = c.benchmark_group("locator");

    let (host, root) = build_nested(1);
    group.bench_function("shallow", |b| {
        b.iter(|| black_box(find_outlet(&host, black_box(root))));
    });

    // Wide root: the outlet is the last of many siblings.
    let mut host = ElementHost::new();
    let mut ids = IdAllocator::new();
    let root = host.tree_mut().insert(None, ElementFlags::default());
    for _ in 0..256 {
        let _ = host.tree_mut().insert(Some(root), ElementFlags::default());
    }
    let outlet_el = host.tree_mut().insert(Some(root), ElementFlags::default());
    let tabs: Tabs<ElementId> = Tabs::new(&mut ids);
    host.attach_outlet(outlet_el, Box::new(tabs));
    group.bench_function("wide", |b| {
        b.iter(|| black_box(find_outlet(&host, black_box(root))));
    });

    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");
    for depth in [3_usize, 8] {
        let (mut host, root) = build_nested(depth);
        let chain = chain_for(depth, false);
        block_on(write_nav_state(&mut host, root, &chain, 0, Direction::Forward)).unwrap();
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| black_box(read_nav_state(&host, black_box(root))));
        });
    }
    group.finish();
}

fn bench_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("writer");
    for depth in [3_usize, 8] {
        // Steady state: every segment re-asserts the active selection.
        let (mut host, root) = build_nested(depth);
        let chain = chain_for(depth, false);
        block_on(write_nav_state(&mut host, root, &chain, 0, Direction::Forward)).unwrap();
        group.bench_function(format!("reassert_depth{depth}"), |b| {
            b.iter(|| {
                block_on(write_nav_state(
                    &mut host,
                    root,
                    black_box(&chain),
                    0,
                    Direction::Forward,
                ))
                .unwrap();
            });
        });

        // Leaf toggle: each write actually switches the deepest outlet.
        let (mut host, root) = build_nested(depth);
        let chains = [chain_for(depth, false), chain_for(depth, true)];
        let mut flip = false;
        group.bench_function(format!("toggle_leaf_depth{depth}"), |b| {
            b.iter(|| {
                flip = !flip;
                block_on(write_nav_state(
                    &mut host,
                    root,
                    black_box(&chains[usize::from(flip)]),
                    0,
                    Direction::Forward,
                ))
                .unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locator, bench_reader, bench_writer);
criterion_main!(benches);
