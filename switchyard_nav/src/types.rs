// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the navigation protocol: route segments, directions,
//! write results, and the error taxonomy.
//!
//! ## Overview
//!
//! These types describe the contract between a router and a tree of outlet
//! containers. They are referenced by the [`writer`](crate::writer) and
//! [`reader`](crate::reader) and implemented against by container crates.

use std::collections::BTreeMap;

/// Route parameters carried by a segment.
///
/// Parameters originate from URL segments in the embedding router and are
/// string-valued. They are carried through the walk but never compared;
/// protocol equality between segments is by [`RouteId::matches`].
pub type ParamMap = BTreeMap<String, String>;

/// One segment of navigation state.
///
/// A route chain is an ordered `&[RouteId]`, root to leaf; index *i* in the
/// chain corresponds to nesting depth *i* in the outlet tree. Values are
/// ephemeral: the router builds a chain per navigation and discards it after
/// the walk completes (or captures it into history).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteId {
    /// External identifier of the segment (e.g. a tab id).
    pub id: String,
    /// Optional parameters carried alongside the segment.
    pub params: Option<ParamMap>,
}

impl RouteId {
    /// A segment with no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    /// A segment carrying parameters.
    pub fn with_params(id: impl Into<String>, params: ParamMap) -> Self {
        Self {
            id: id.into(),
            params: Some(params),
        }
    }

    /// Protocol equality: two segments match iff their `id` strings are
    /// equal. Parameters are carried, not compared.
    pub fn matches(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Transition intent propagated down a chain walk.
///
/// Once any node in the walk reports a change, the direction collapses to
/// [`Direction::None`] for all deeper nodes: a descendant transition cannot
/// meaningfully continue a direction once an ancestor's switch has already
/// been determined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Backward transition intent (e.g. a pop).
    Back,
    /// No directional intent.
    #[default]
    None,
    /// Forward transition intent (e.g. a push).
    Forward,
}

/// Result of asking an outlet to adopt one route segment.
///
/// `changed` is `true` only when the node's active child actually switched,
/// as opposed to re-asserting an already-active selection. When a switch
/// happened, `visibility` carries the deferred reveal: the caller must
/// redeem it via [`NavOutlet::mark_visible`](crate::outlet::NavOutlet::mark_visible)
/// only after the whole subtree below has settled, never before.
#[derive(Debug)]
#[must_use]
pub struct RouteWrite {
    /// Whether the active selection actually switched.
    pub changed: bool,
    /// Deferred reveal token, present when a switch is awaiting finalize.
    pub visibility: Option<PendingVisibility>,
}

impl RouteWrite {
    /// No switch was warranted; nothing to finalize.
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            visibility: None,
        }
    }

    /// The selection switched; finalization is deferred to the caller.
    pub fn deferred() -> Self {
        Self {
            changed: true,
            visibility: Some(PendingVisibility::new()),
        }
    }
}

/// One-shot token for a deferred visibility action.
///
/// An explicit command value rather than a closure: whoever holds the token
/// decides when the reveal runs, and it can run at most once because
/// [`NavOutlet::mark_visible`](crate::outlet::NavOutlet::mark_visible)
/// consumes it.
#[derive(Debug, Default)]
#[must_use]
pub struct PendingVisibility {
    _priv: (),
}

impl PendingVisibility {
    /// Create a fresh token. Issued by outlets when they defer finalization.
    pub const fn new() -> Self {
        Self { _priv: () }
    }
}

/// Result of reading the displayed state back out of an outlet tree.
///
/// Returned by [`read_nav_state`](crate::reader::read_nav_state). `pivot` is
/// the deepest outlet encountered — useful for callers that need to act
/// directly on the active leaf outlet, e.g. to push a new segment below it.
#[derive(Clone, Debug)]
pub struct NavState<K> {
    /// Active segments, root to leaf.
    pub ids: Vec<RouteId>,
    /// The deepest outlet reached, if any outlet was found at all.
    pub pivot: Option<K>,
}

/// Errors surfaced by outlet operations and propagated by the chain writer.
///
/// No-ops are not errors: selecting an already-active or unresolvable target
/// through the public operations yields `Ok(false)` / an unchanged
/// [`RouteWrite`], never an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum OutletError {
    /// A selection request arrived while a transition is in flight. The
    /// request is rejected, not queued; callers must not blindly retry.
    #[error("transitioning already happening")]
    Transitioning,
    /// The internal activation path was reached without a resolved target.
    #[error("no target is selected")]
    NoTargetSelected,
    /// A readiness wait or activation hook failed. Propagates unmodified
    /// through the writer's recursion; no rollback is attempted.
    #[error("activation hook failed: {0}")]
    Activation(#[source] Box<dyn std::error::Error>),
}

impl OutletError {
    /// Wrap a host-side hook failure.
    pub fn activation(err: impl Into<Box<dyn std::error::Error>>) -> Self {
        Self::Activation(err.into())
    }
}
