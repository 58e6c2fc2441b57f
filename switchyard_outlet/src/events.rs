// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public notifications and the router link.
//!
//! ## Overview
//!
//! Containers emit two notifications when a switch finalizes: a selection
//! change (carrying the newly active segment) and a navigation change
//! (carrying the back flag), in that order. Observers are registered on the
//! container; the router link is injected at construction — there is no
//! ambient, document-wide router lookup.

use async_trait::async_trait;
use switchyard_nav::types::RouteId;

/// Payload of a navigation-changed notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavChange {
    /// Whether the change was a back-navigation (a pop).
    pub back: bool,
}

/// External observer of a container's public notifications (history stacks,
/// analytics, ...).
pub trait OutletObserver {
    /// The active selection switched; `selected` is the newly active segment.
    fn selection_changed(&mut self, selected: &RouteId);

    /// Navigation changed. Fires after `selection_changed` for the same
    /// switch.
    fn nav_changed(&mut self, change: NavChange);
}

/// Link to the external router, injected at construction.
///
/// Presence of a link means the router is authoritative: containers skip
/// their own initial-selection policy and report user-driven switches here
/// so the router can update its chain and history bookkeeping. Router-driven
/// writes (via `set_route_id`) are never reported back.
#[async_trait(?Send)]
pub trait RouterLink {
    /// A user-driven selection changed the active child.
    async fn nav_changed(&mut self, change: NavChange);
}

/// A link that drops every notification. Useful when a container must run
/// in router-driven mode without a real router, e.g. in tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullRouterLink;

#[async_trait(?Send)]
impl RouterLink for NullRouterLink {
    async fn nav_changed(&mut self, _change: NavChange) {}
}
