// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route-chain writer: apply a chain through nested outlets.
//!
//! ## Overview
//!
//! Walks outlet nodes top-down, applying one route segment per node and
//! recursing into whatever container each node reports as its active child.
//! The walk is strictly sequential depth-first: depth *i + 1* is not entered
//! until depth *i*'s adoption has resolved.
//!
//! ## Ordering
//!
//! A node's deferred reveal is redeemed only after the recursive call for
//! the subtree below it has settled. Reveals therefore fire leaf-first and
//! root-last, so a container never becomes visible midway through repainting
//! its own children.
//!
//! ## Failure policy
//!
//! Per-node failures are not caught here: a readiness or adoption error
//! propagates unmodified up the recursion, aborting the remaining segments.
//! No rollback is attempted — the tree is left however far the walk got.

use futures::future::LocalBoxFuture;

use crate::locator::find_outlet;
use crate::outlet::OutletHost;
use crate::types::{Direction, OutletError, RouteId};

/// Apply `chain[index..]` to the outlet tree under `root`.
///
/// Terminal conditions (resolve immediately, no side effects): the chain is
/// exhausted, or no outlet exists under `root` — remaining segments are
/// dropped, matching the embedding router's behavior when a chain is deeper
/// than the live tree.
pub fn write_nav_state<'a, H: OutletHost>(
    host: &'a mut H,
    root: H::Key,
    chain: &'a [RouteId],
    index: usize,
    direction: Direction,
) -> LocalBoxFuture<'a, Result<(), OutletError>> {
    Box::pin(async move {
        if index >= chain.len() {
            return Ok(());
        }
        let Some(at) = find_outlet(&*host, root) else {
            tracing::debug!(
                unconsumed = chain.len() - index,
                "no outlet under root; dropping remaining segments"
            );
            return Ok(());
        };
        let route = &chain[index];
        let Some(outlet) = host.outlet_mut(at) else {
            return Ok(());
        };
        outlet.ready().await?;
        let write = outlet
            .set_route_id(&route.id, route.params.as_ref(), direction)
            .await?;
        // A change already occurred; nested outlets must not re-trigger a
        // directional transition of their own.
        let direction = if write.changed {
            Direction::None
        } else {
            direction
        };
        let next = outlet.container();
        match next {
            Some(next_root) => {
                write_nav_state(&mut *host, next_root, chain, index + 1, direction).await?;
            }
            None => {
                if index + 1 < chain.len() {
                    tracing::debug!(
                        unconsumed = chain.len() - index - 1,
                        "active path ends here; dropping remaining segments"
                    );
                }
            }
        }
        if let Some(pending) = write.visibility
            && let Some(outlet) = host.outlet_mut(at)
        {
            outlet.mark_visible(pending);
        }
        Ok(())
    })
}
