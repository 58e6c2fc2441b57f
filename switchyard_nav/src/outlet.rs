// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outlet capability and the host topology it is resolved against.
//!
//! ## Overview
//!
//! An *outlet* is a container capable of hosting exactly one active child
//! view at a time and switching between candidate children. The walk never
//! matches on tags or types; any element whose host exposes a [`NavOutlet`]
//! for it participates.
//!
//! All async surfaces are `?Send`: the protocol is single-threaded and
//! cooperative, composed of sequential futures rather than parallel tasks.

use async_trait::async_trait;

use crate::types::{Direction, OutletError, ParamMap, PendingVisibility, RouteId, RouteWrite};

/// Capability implemented by any navigable container variant (tab switcher,
/// stack navigator, ...).
///
/// `K` is the host's element key type; [`NavOutlet::container`] hands the
/// walk the key of the active child container to recurse into.
///
/// ## Contract
///
/// - [`ready`](NavOutlet::ready) resolves once the node has finished its own
///   initialization; the writer awaits it before every adoption.
/// - [`set_route_id`](NavOutlet::set_route_id) adopts one segment and
///   reports whether the active selection actually switched. When it did,
///   the returned [`RouteWrite`] carries a [`PendingVisibility`] token and
///   the node stays in its transitioning state until the token is redeemed.
/// - [`mark_visible`](NavOutlet::mark_visible) finalizes a deferred switch:
///   clears the transitioning state and fires the public change
///   notifications. The writer redeems tokens leaf-first.
#[async_trait(?Send)]
pub trait NavOutlet<K> {
    /// Resolves when the node is initialized and able to adopt a segment.
    async fn ready(&mut self) -> Result<(), OutletError>;

    /// Adopt one route segment, resolved by external id.
    ///
    /// Re-asserting the already-active selection is a no-op and yields
    /// [`RouteWrite::unchanged`], not an error.
    async fn set_route_id(
        &mut self,
        id: &str,
        params: Option<&ParamMap>,
        direction: Direction,
    ) -> Result<RouteWrite, OutletError>;

    /// The currently active segment, if any.
    fn route_id(&self) -> Option<RouteId>;

    /// Key of the active child container, or `None` when the node is a leaf
    /// in the active path.
    fn container(&self) -> Option<K>;

    /// Execute the deferred reveal for a previously adopted segment.
    fn mark_visible(&mut self, pending: PendingVisibility);
}

/// Topology and capability lookup the walk operates against.
///
/// Hosts own the element hierarchy and the outlet instances; the walk only
/// queries and mutates through this trait. Children must be reported in
/// document order — that order defines which outlet is "nearest".
pub trait OutletHost {
    /// Element key type. Small and copyable, like an arena handle.
    type Key: Copy + Eq;

    /// Children of `of` in document order. Empty for unknown keys.
    fn children(&self, of: Self::Key) -> &[Self::Key];

    /// The outlet capability at `at`, if the element is a navigable
    /// container.
    fn outlet(&self, at: Self::Key) -> Option<&dyn NavOutlet<Self::Key>>;

    /// Mutable access to the outlet capability at `at`.
    fn outlet_mut(&mut self, at: Self::Key) -> Option<&mut dyn NavOutlet<Self::Key>>;
}
