// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=switchyard_nav --heading-base-level=0

//! Switchyard Nav: deterministic reconciliation of a route chain across nested navigation outlets.
//!
//! ## Overview
//!
//! This crate keeps a tree of nested "outlet" containers — tab switchers,
//! stack navigators — synchronized with a single logical route chain. It
//! does not render anything and does not decide *which* chain to apply;
//! an embedding router computes the chain, and this crate walks it through
//! the live tree.
//!
//! - A route chain is an ordered sequence of [`RouteId`](crate::types::RouteId)
//!   segments, root to leaf; index *i* corresponds to nesting depth *i*.
//! - Containers expose the [`NavOutlet`](crate::outlet::NavOutlet)
//!   capability; hosts expose topology through
//!   [`OutletHost`](crate::outlet::OutletHost).
//! - The nearest outlet is resolved by interface dispatch in document order
//!   ([`find_outlet`](crate::locator::find_outlet)), never by tag matching.
//!
//! ## Writing
//!
//! [`write_nav_state`](crate::writer::write_nav_state) walks outlets
//! top-down, applying one segment per node and recursing into each node's
//! active child container. Once any node reports an actual change, the
//! transition direction collapses to
//! [`Direction::None`](crate::types::Direction::None) for everything deeper.
//!
//! ## Reading
//!
//! [`read_nav_state`](crate::reader::read_nav_state) walks the live tree
//! bottom-seeking into active children and reconstructs the displayed chain,
//! together with the deepest outlet reached (the *pivot*).
//!
//! ## Ordering
//!
//! Adoption runs top-down; deferred reveals
//! ([`PendingVisibility`](crate::types::PendingVisibility)) are redeemed
//! bottom-up, only after the deeper recursion has settled. A container never
//! becomes visible midway through repainting its own children.
//!
//! ## Concurrency model
//!
//! Single-threaded and cooperative: every async surface is `?Send` and the
//! walk is strictly sequential. There is no timeout or cancellation here; a
//! stalled readiness or activation hook stalls the chain, and timeout policy
//! belongs to the embedding router.
//!
//! ## Minimal usage
//!
//! ```
//! use std::collections::HashMap;
//!
//! use async_trait::async_trait;
//! use futures::executor::block_on;
//! use switchyard_nav::outlet::{NavOutlet, OutletHost};
//! use switchyard_nav::reader::read_nav_state;
//! use switchyard_nav::types::{
//!     Direction, OutletError, ParamMap, PendingVisibility, RouteId, RouteWrite,
//! };
//! use switchyard_nav::writer::write_nav_state;
//!
//! /// A toy one-child-at-a-time container.
//! struct Switcher {
//!     active: Option<String>,
//!     pane: Option<u32>,
//! }
//!
//! #[async_trait(?Send)]
//! impl NavOutlet<u32> for Switcher {
//!     async fn ready(&mut self) -> Result<(), OutletError> {
//!         Ok(())
//!     }
//!
//!     async fn set_route_id(
//!         &mut self,
//!         id: &str,
//!         _params: Option<&ParamMap>,
//!         _direction: Direction,
//!     ) -> Result<RouteWrite, OutletError> {
//!         if self.active.as_deref() == Some(id) {
//!             return Ok(RouteWrite::unchanged());
//!         }
//!         self.active = Some(id.to_owned());
//!         Ok(RouteWrite::deferred())
//!     }
//!
//!     fn route_id(&self) -> Option<RouteId> {
//!         self.active.as_deref().map(RouteId::new)
//!     }
//!
//!     fn container(&self) -> Option<u32> {
//!         self.pane
//!     }
//!
//!     fn mark_visible(&mut self, _pending: PendingVisibility) {}
//! }
//!
//! /// Topology over plain `u32` keys.
//! struct Host {
//!     children: HashMap<u32, Vec<u32>>,
//!     outlets: HashMap<u32, Switcher>,
//! }
//!
//! impl OutletHost for Host {
//!     type Key = u32;
//!
//!     fn children(&self, of: u32) -> &[u32] {
//!         self.children.get(&of).map_or(&[], Vec::as_slice)
//!     }
//!
//!     fn outlet(&self, at: u32) -> Option<&dyn NavOutlet<u32>> {
//!         self.outlets.get(&at).map(|o| o as &dyn NavOutlet<u32>)
//!     }
//!
//!     fn outlet_mut(&mut self, at: u32) -> Option<&mut dyn NavOutlet<u32>> {
//!         self.outlets.get_mut(&at).map(|o| o as &mut dyn NavOutlet<u32>)
//!     }
//! }
//!
//! // Two nested switchers: one at key 1 whose pane (key 2) holds another at key 3.
//! let mut host = Host {
//!     children: HashMap::new(),
//!     outlets: HashMap::new(),
//! };
//! host.children.insert(0, vec![1]);
//! host.children.insert(2, vec![3]);
//! host.outlets.insert(1, Switcher { active: None, pane: Some(2) });
//! host.outlets.insert(3, Switcher { active: None, pane: None });
//!
//! let chain = vec![RouteId::new("settings"), RouteId::new("profile")];
//! block_on(write_nav_state(&mut host, 0, &chain, 0, Direction::Forward)).unwrap();
//!
//! let state = read_nav_state(&host, 0);
//! let ids: Vec<_> = state.ids.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, vec!["settings", "profile"]);
//! assert_eq!(state.pivot, Some(3));
//! ```
//!
//! ## Container implementations
//!
//! Ready-made container variants (a tab switcher and a stack navigator) live
//! in `switchyard_outlet`. The `tree_adapter` feature provides
//! [`ElementHost`](crate::adapters::element_tree::ElementHost), a host over
//! the `switchyard_tree` arena.

pub mod adapters;
pub mod locator;
pub mod outlet;
pub mod reader;
pub mod types;
pub mod writer;

#[cfg(test)]
mod fixtures;
