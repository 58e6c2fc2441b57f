// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack-navigator container.
//!
//! ## Overview
//!
//! [`Stack`] keeps a stack of registered candidate views and shows the top
//! one. It implements the same [`NavOutlet`] capability as [`Tabs`]
//! (tab switcher), which is what makes the chain walk polymorphic over
//! container kinds: the writer never knows which variant it is driving.
//!
//! Views are registered up front — the container activates and rearranges
//! them but never creates or destroys content. A router-driven adoption
//! makes the matching view the top of the stack: re-asserting the current
//! top is a no-op, a view already in the stack pops everything above it, and
//! any other view is pushed.
//!
//! There is deliberately no browser-history bookkeeping here; that belongs
//! to the embedding router.
//!
//! [`Tabs`]: crate::tabs::Tabs

use async_trait::async_trait;

use switchyard_nav::outlet::NavOutlet;
use switchyard_nav::types::{
    Direction, OutletError, ParamMap, PendingVisibility, RouteId, RouteWrite,
};

use crate::content::{ContentHooks, InertContent};
use crate::events::{NavChange, OutletObserver, RouterLink};
use crate::ids::{IdAllocator, OutletId, SlotId};

/// One registered view: an external route id, an optional content pane, and
/// host-side lifecycle hooks.
pub struct View<K> {
    route: String,
    slot: Option<SlotId>,
    pane: Option<K>,
    content: Box<dyn ContentHooks>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for View<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("View")
            .field("route", &self.route)
            .field("slot", &self.slot)
            .field("pane", &self.pane)
            .finish_non_exhaustive()
    }
}

impl<K> View<K> {
    /// A view with inert content.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            slot: None,
            pane: None,
            content: Box::new(InertContent),
        }
    }

    /// Attach the view's content pane.
    pub fn with_pane(mut self, pane: K) -> Self {
        self.pane = Some(pane);
        self
    }

    /// Attach host-side lifecycle hooks.
    pub fn with_content(mut self, content: Box<dyn ContentHooks>) -> Self {
        self.content = content;
        self
    }

    /// The view's external route id.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Slot identifier, assigned at mount.
    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }
}

/// A stack-navigator container.
pub struct Stack<K> {
    id: OutletId,
    views: Vec<View<K>>,
    stack: Vec<usize>, // indices into `views`, bottom to top
    leaving: Option<usize>,
    last_pop: bool,
    transitioning: bool,
    mounted: bool,
    router: Option<Box<dyn RouterLink>>,
    observers: Vec<Box<dyn OutletObserver>>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for Stack<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stack")
            .field("id", &self.id)
            .field("views", &self.views)
            .field("stack", &self.stack)
            .field("transitioning", &self.transitioning)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<K: Copy> Stack<K> {
    /// Create an empty container, drawing its identity from `ids`.
    pub fn new(ids: &mut IdAllocator) -> Self {
        Self {
            id: ids.allocate(),
            views: Vec::new(),
            stack: Vec::new(),
            leaving: None,
            last_pop: false,
            transitioning: false,
            mounted: false,
            router: None,
            observers: Vec::new(),
        }
    }

    /// Inject the external router link. The router becomes authoritative:
    /// no root view is shown at mount.
    pub fn with_router(mut self, router: Box<dyn RouterLink>) -> Self {
        self.router = Some(router);
        self
    }

    /// Register an observer for the public notifications.
    pub fn observe(&mut self, observer: Box<dyn OutletObserver>) {
        self.observers.push(observer);
    }

    /// Register a candidate view. The first registered view is the root
    /// view for standalone mounts.
    pub fn add_view(&mut self, view: View<K>) {
        self.views.push(view);
    }

    /// This container's identity.
    pub fn outlet_id(&self) -> OutletId {
        self.id
    }

    /// Registered views in registration order.
    pub fn views(&self) -> &[View<K>] {
        &self.views
    }

    /// Number of views currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The view currently on top, if any.
    pub fn top_view(&self) -> Option<&View<K>> {
        self.stack.last().map(|&i| &self.views[i])
    }

    /// Whether a switch is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// User-driven forward navigation to the view with external id `id`.
    ///
    /// No-op when the target is unresolved or already on top. The router
    /// link is notified and the switch finalizes before returning.
    pub async fn push(&mut self, id: &str) -> Result<bool, OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        let Some(idx) = self.resolve(id) else {
            return Ok(false);
        };
        if self.stack.last() == Some(&idx) {
            return Ok(false);
        }
        self.begin(idx).await?;
        self.notify_router(false).await;
        Ok(self.finish_transition())
    }

    /// User-driven back navigation to the view below the top.
    ///
    /// No-op when there is nothing to go back to.
    pub async fn pop(&mut self) -> Result<bool, OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        if self.stack.len() < 2 {
            return Ok(false);
        }
        let target = self.stack[self.stack.len() - 2];
        self.begin(target).await?;
        self.notify_router(true).await;
        Ok(self.finish_transition())
    }

    fn resolve(&self, id: &str) -> Option<usize> {
        self.views.iter().position(|v| v.route == id)
    }

    /// Begin a switch: rearrange the stack so `idx` is on top, mark
    /// transitioning, and await the entering view's activation hook.
    async fn begin(&mut self, idx: usize) -> Result<(), OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        if idx >= self.views.len() {
            return Err(OutletError::NoTargetSelected);
        }
        self.leaving = self.stack.last().copied();
        if let Some(pos) = self.stack.iter().position(|&v| v == idx) {
            self.stack.truncate(pos + 1);
            self.last_pop = true;
        } else {
            self.stack.push(idx);
            self.last_pop = false;
        }
        self.transitioning = true;
        self.views[idx]
            .content
            .activate()
            .await
            .map_err(OutletError::activation)?;
        Ok(())
    }

    /// Finalize the in-flight switch and fire the public notifications iff
    /// the leaving and entering views differ by identity.
    fn finish_transition(&mut self) -> bool {
        let leaving = self.leaving.take();
        self.transitioning = false;
        let Some(&top) = self.stack.last() else {
            return false;
        };
        if leaving == Some(top) {
            return false;
        }
        let route = RouteId::new(self.views[top].route.clone());
        for observer in &mut self.observers {
            observer.selection_changed(&route);
        }
        let change = NavChange {
            back: self.last_pop,
        };
        for observer in &mut self.observers {
            observer.nav_changed(change);
        }
        true
    }

    async fn notify_router(&mut self, back: bool) {
        if let Some(router) = self.router.as_mut() {
            router.nav_changed(NavChange { back }).await;
        }
    }

    async fn mount(&mut self) -> Result<(), OutletError> {
        for (index, view) in self.views.iter_mut().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "slot indices are 32-bit by design"
            )]
            let index = index as u32;
            view.slot = Some(SlotId {
                outlet: self.id,
                index,
            });
            view.content.ready().await.map_err(OutletError::activation)?;
        }
        // Standalone mounts show the root view; a router-driven stack stays
        // empty until the first adoption.
        if self.router.is_none()
            && self.stack.is_empty()
            && !self.views.is_empty()
        {
            self.stack.push(0);
            self.views[0]
                .content
                .activate()
                .await
                .map_err(OutletError::activation)?;
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<K: Copy> NavOutlet<K> for Stack<K> {
    async fn ready(&mut self) -> Result<(), OutletError> {
        if self.mounted {
            return Ok(());
        }
        self.mount().await?;
        self.mounted = true;
        Ok(())
    }

    async fn set_route_id(
        &mut self,
        id: &str,
        _params: Option<&ParamMap>,
        _direction: Direction,
    ) -> Result<RouteWrite, OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        let Some(idx) = self.resolve(id) else {
            return Ok(RouteWrite::unchanged());
        };
        if self.stack.last() == Some(&idx) {
            return Ok(RouteWrite::unchanged());
        }
        self.begin(idx).await?;
        Ok(RouteWrite::deferred())
    }

    fn route_id(&self) -> Option<RouteId> {
        self.stack
            .last()
            .map(|&i| RouteId::new(self.views[i].route.clone()))
    }

    fn container(&self) -> Option<K> {
        self.stack.last().and_then(|&i| self.views[i].pane)
    }

    fn mark_visible(&mut self, _pending: PendingVisibility) {
        let _ = self.finish_transition();
    }
}
