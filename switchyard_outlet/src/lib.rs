// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=switchyard_outlet --heading-base-level=0

//! Switchyard Outlet: navigable container variants for the Switchyard nav protocol.
//!
//! ## Overview
//!
//! This crate provides the container side of the protocol defined in
//! `switchyard_nav`:
//!
//! - [`Tabs`](crate::tabs::Tabs) — a tab switcher holding a row of candidate
//!   tabs with exactly one selection.
//! - [`Stack`](crate::stack::Stack) — a stack navigator showing the top of a
//!   stack of registered views.
//!
//! Both implement the `NavOutlet` capability, so a route-chain writer drives
//! them without knowing which variant it found. User-driven operations
//! (`select`, `push`, `pop`) finalize immediately and report the change to
//! the injected router link; router-driven adoptions defer finalization to
//! the writer via the pending-visibility token.
//!
//! ## Wiring
//!
//! - Identity comes from an [`IdAllocator`](crate::ids::IdAllocator) owned
//!   by the embedding toolkit — nothing here keeps ambient counters.
//! - The router is injected at construction
//!   ([`RouterLink`](crate::events::RouterLink)); its presence switches a
//!   container into router-driven mode.
//! - Hosts observe public notifications via
//!   [`OutletObserver`](crate::events::OutletObserver) and supply pane
//!   lifecycle hooks via [`ContentHooks`](crate::content::ContentHooks).
//!
//! ## Minimal usage
//!
//! ```
//! use futures::executor::block_on;
//! use switchyard_outlet::ids::IdAllocator;
//! use switchyard_outlet::tabs::{Tab, Tabs, TabTarget};
//!
//! let mut ids = IdAllocator::new();
//! let mut tabs: Tabs<u32> = Tabs::new(&mut ids);
//! tabs.add_tab(Tab::new("inbox"));
//! tabs.add_tab(Tab::new("archive"));
//!
//! block_on(async {
//!     use switchyard_nav::outlet::NavOutlet;
//!
//!     // Standalone mount: the initial-selection policy picks "inbox".
//!     tabs.ready().await.unwrap();
//!     assert_eq!(tabs.route_id().unwrap().id, "inbox");
//!
//!     // A user click switches to "archive" and finalizes immediately.
//!     let changed = tabs.select(TabTarget::Id("archive")).await.unwrap();
//!     assert!(changed);
//! });
//! ```

pub mod content;
pub mod events;
pub mod ids;
pub mod stack;
pub mod tabs;
