// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side content hooks.
//!
//! Containers do not own what their panes display; the host does. These
//! hooks are the suspension points of the protocol: a container awaits
//! [`ContentHooks::ready`] while mounting and [`ContentHooks::activate`]
//! while switching, and a hook that never resolves stalls the chain — there
//! is deliberately no timeout here.

use async_trait::async_trait;

/// Failure raised by a host-side hook. Containers wrap it into
/// [`OutletError::Activation`](switchyard_nav::types::OutletError::Activation)
/// and the writer propagates it unmodified.
pub type ContentError = Box<dyn std::error::Error>;

/// Lifecycle hooks for one slot's content pane.
#[async_trait(?Send)]
pub trait ContentHooks {
    /// Resolves when the pane's content has finished initializing.
    async fn ready(&mut self) -> Result<(), ContentError> {
        Ok(())
    }

    /// Invoked when the pane becomes the active selection, before the
    /// switch is finalized.
    async fn activate(&mut self) -> Result<(), ContentError> {
        Ok(())
    }
}

/// Content with no hooks of its own; always ready, activates instantly.
#[derive(Copy, Clone, Debug, Default)]
pub struct InertContent;

#[async_trait(?Send)]
impl ContentHooks for InertContent {}
