// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=switchyard_tree --heading-base-level=0

//! Switchyard Tree: a generational element arena for navigable UI hierarchies.
//!
//! Switchyard Tree is the structural substrate the navigation walk operates on.
//! It knows nothing about routes or outlets; it stores parent/child structure,
//! per-element flags, and hands out stable generational handles.
//!
//! - Represents a hierarchy of UI elements with visibility/inertness flags.
//! - Children keep insertion order, which doubles as document order.
//! - Provides a preorder [`Tree::descendants`] traversal used by outlet lookup.
//!
//! ## Where this fits
//!
//! The navigation stack separates concerns the same way the wider toolkit does:
//! - Element tree: structure and flags (this crate).
//! - Nav protocol: the route-chain writer/reader and the outlet capability
//!   ([`switchyard_nav`](https://docs.rs/switchyard_nav)).
//! - Containers: tab switchers and stack navigators implementing the
//!   capability ([`switchyard_outlet`](https://docs.rs/switchyard_outlet)).
//!
//! ## Not a layout engine
//!
//! This crate does not measure, arrange, or paint anything. Hosts own element
//! lifetimes; container components only toggle flags on the panes they manage.
//!
//! ## API overview
//!
//! - [`Tree`]: container managing element slots.
//! - [`ElementId`]: generational handle of an element.
//! - [`ElementFlags`]: visibility/inertness controls.
//!
//! Key operations:
//! - [`Tree::insert`] → [`ElementId`]
//! - [`Tree::remove`] / [`Tree::reparent`]
//! - [`Tree::children`] / [`Tree::parent`] / [`Tree::descendants`]
//!
//! ### Minimal usage
//!
//! ```
//! use switchyard_tree::{ElementFlags, Tree};
//!
//! // Build a tiny hierarchy.
//! let mut tree = Tree::new();
//! let root = tree.insert(None, ElementFlags::default());
//! let pane = tree.insert(Some(root), ElementFlags::default());
//!
//! // Hide the pane while it is off-screen.
//! tree.set_flags(pane, ElementFlags::INERT);
//! assert_eq!(tree.flags(pane), Some(ElementFlags::INERT));
//!
//! // Document order: the root itself first, then children in insertion order.
//! let order: Vec<_> = tree.descendants(root).collect();
//! assert_eq!(order, vec![root, pane]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Descendants, Tree};
pub use types::{ElementFlags, ElementId};
