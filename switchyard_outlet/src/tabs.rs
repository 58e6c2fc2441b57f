// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-switcher container.
//!
//! ## Overview
//!
//! [`Tabs`] hosts a row of candidate tabs and keeps exactly one of them
//! selected. It implements the [`NavOutlet`] capability so a route-chain
//! writer can drive it, and it exposes a user-driven [`Tabs::select`] for
//! direct interaction (a tab-bar click).
//!
//! ## States
//!
//! Idle (nothing selected), active (one selected tab), transitioning (a
//! switch in flight). At most one tab is SELECTED at any time; during a
//! transition the leaving and entering tabs may both be ACTIVE until the
//! switch finalizes. `transitioning` is the sole concurrency guard: a second
//! request while a transition is in flight is rejected, not queued.
//!
//! ## Finalization
//!
//! A user-driven `select` finalizes immediately. A router-driven
//! `set_route_id` defers finalization — and the public notifications — to
//! the holder of the returned [`PendingVisibility`] token, so nested
//! containers below can settle first.

use async_trait::async_trait;

use switchyard_nav::outlet::NavOutlet;
use switchyard_nav::types::{
    Direction, OutletError, ParamMap, PendingVisibility, RouteId, RouteWrite,
};

use crate::content::{ContentHooks, InertContent};
use crate::events::{NavChange, OutletObserver, RouterLink};
use crate::ids::{IdAllocator, OutletId, SlotId};

bitflags::bitflags! {
    /// Per-tab state and configuration flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TabFlags: u8 {
        /// Tab is the current selection (its button renders selected).
        const SELECTED = 0b0000_0001;
        /// Tab content is mounted. During a transition both the leaving and
        /// the entering tab carry this bit.
        const ACTIVE   = 0b0000_0010;
        /// Tab participates in the bar.
        const SHOWN    = 0b0000_0100;
        /// Tab cannot be chosen by the initial-selection policy.
        const DISABLED = 0b0000_1000;
    }
}

impl Default for TabFlags {
    fn default() -> Self {
        Self::SHOWN
    }
}

/// One registered tab: an external route id, an optional content pane in the
/// host's element tree, and the host-side lifecycle hooks.
pub struct Tab<K> {
    route: String,
    slot: Option<SlotId>,
    pane: Option<K>,
    flags: TabFlags,
    content: Box<dyn ContentHooks>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for Tab<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tab")
            .field("route", &self.route)
            .field("slot", &self.slot)
            .field("pane", &self.pane)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl<K> Tab<K> {
    /// A shown, enabled tab with inert content.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            slot: None,
            pane: None,
            flags: TabFlags::default(),
            content: Box::new(InertContent),
        }
    }

    /// Attach the tab's content pane (the element the walk recurses into).
    pub fn with_pane(mut self, pane: K) -> Self {
        self.pane = Some(pane);
        self
    }

    /// Attach host-side lifecycle hooks.
    pub fn with_content(mut self, content: Box<dyn ContentHooks>) -> Self {
        self.content = content;
        self
    }

    /// Mark the tab as explicitly pre-selected for standalone mounts.
    pub fn preselected(mut self) -> Self {
        self.flags.insert(TabFlags::SELECTED);
        self
    }

    /// Exclude the tab from the bar.
    pub fn hidden(mut self) -> Self {
        self.flags.remove(TabFlags::SHOWN);
        self
    }

    /// Exclude the tab from the initial-selection policy.
    pub fn disabled(mut self) -> Self {
        self.flags.insert(TabFlags::DISABLED);
        self
    }

    /// The tab's external route id.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Current flags.
    pub fn flags(&self) -> TabFlags {
        self.flags
    }

    /// Slot identifier, assigned at mount.
    pub fn slot(&self) -> Option<SlotId> {
        self.slot
    }
}

/// How to address a tab in [`Tabs::select`].
#[derive(Copy, Clone, Debug)]
pub enum TabTarget<'a> {
    /// By registration position.
    Index(usize),
    /// By external route id.
    Id(&'a str),
}

/// A tab-switcher container.
///
/// Construct with an [`IdAllocator`] owned by the embedding toolkit,
/// register tabs, optionally inject a [`RouterLink`], and either mount it
/// standalone (the initial-selection policy picks a tab) or let a
/// route-chain writer drive it.
pub struct Tabs<K> {
    id: OutletId,
    tabs: Vec<Tab<K>>,
    selected: Option<usize>,
    leaving: Option<usize>,
    transitioning: bool,
    mounted: bool,
    router: Option<Box<dyn RouterLink>>,
    observers: Vec<Box<dyn OutletObserver>>,
}

impl<K: core::fmt::Debug> core::fmt::Debug for Tabs<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tabs")
            .field("id", &self.id)
            .field("tabs", &self.tabs)
            .field("selected", &self.selected)
            .field("leaving", &self.leaving)
            .field("transitioning", &self.transitioning)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<K: Copy> Tabs<K> {
    /// Create an empty container, drawing its identity from `ids`.
    pub fn new(ids: &mut IdAllocator) -> Self {
        Self {
            id: ids.allocate(),
            tabs: Vec::new(),
            selected: None,
            leaving: None,
            transitioning: false,
            mounted: false,
            router: None,
            observers: Vec::new(),
        }
    }

    /// Inject the external router link. The router becomes authoritative:
    /// pre-selection markers are ignored at mount.
    pub fn with_router(mut self, router: Box<dyn RouterLink>) -> Self {
        self.router = Some(router);
        self
    }

    /// Register an observer for the public notifications.
    pub fn observe(&mut self, observer: Box<dyn OutletObserver>) {
        self.observers.push(observer);
    }

    /// Register a tab. Order of registration is bar order.
    pub fn add_tab(&mut self, tab: Tab<K>) {
        self.tabs.push(tab);
    }

    /// This container's identity.
    pub fn outlet_id(&self) -> OutletId {
        self.id
    }

    /// Registered tabs in bar order.
    pub fn tabs(&self) -> &[Tab<K>] {
        &self.tabs
    }

    /// Index of the current selection.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected tab.
    pub fn selected_tab(&self) -> Option<&Tab<K>> {
        self.selected.map(|i| &self.tabs[i])
    }

    /// Whether a switch is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// User-driven selection (a tab-bar click).
    ///
    /// Returns `Ok(true)` when the selection actually switched, `Ok(false)`
    /// for no-ops (unresolved target, already-active target), and
    /// [`OutletError::Transitioning`] while a switch is in flight. The
    /// router link is notified and the switch finalizes before returning.
    pub async fn select(&mut self, target: TabTarget<'_>) -> Result<bool, OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        let Some(idx) = self.resolve(target) else {
            return Ok(false);
        };
        if !self.should_switch(idx) {
            return Ok(false);
        }
        self.set_active(idx).await?;
        self.notify_router().await;
        Ok(self.finish_switch())
    }

    fn resolve(&self, target: TabTarget<'_>) -> Option<usize> {
        match target {
            TabTarget::Index(i) => (i < self.tabs.len()).then_some(i),
            TabTarget::Id(id) => self.tabs.iter().position(|t| t.route == id),
        }
    }

    fn should_switch(&self, idx: usize) -> bool {
        self.selected != Some(idx) && !self.transitioning
    }

    /// Begin a switch: deselect siblings, mark transitioning, swap the
    /// active reference, and await the entering tab's activation hook.
    ///
    /// On hook failure the container is left transitioning; recovery is the
    /// embedding router's decision, not this container's.
    async fn set_active(&mut self, idx: usize) -> Result<(), OutletError> {
        if self.transitioning {
            return Err(OutletError::Transitioning);
        }
        if idx >= self.tabs.len() {
            return Err(OutletError::NoTargetSelected);
        }
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if i != idx {
                tab.flags.remove(TabFlags::SELECTED);
            }
        }
        self.transitioning = true;
        self.leaving = self.selected;
        self.selected = Some(idx);
        let tab = &mut self.tabs[idx];
        tab.content
            .activate()
            .await
            .map_err(OutletError::activation)?;
        tab.flags.insert(TabFlags::ACTIVE);
        Ok(())
    }

    /// Finalize the in-flight switch: settle flags and fire the public
    /// notifications iff the leaving and entering tabs differ by identity.
    fn finish_switch(&mut self) -> bool {
        let selected = self.selected;
        let leaving = self.leaving.take();
        self.transitioning = false;
        let Some(idx) = selected else {
            return false;
        };
        self.tabs[idx].flags.insert(TabFlags::SELECTED);
        if leaving == Some(idx) {
            return false;
        }
        if let Some(l) = leaving {
            self.tabs[l].flags.remove(TabFlags::ACTIVE);
        }
        let route = RouteId::new(self.tabs[idx].route.clone());
        for observer in &mut self.observers {
            observer.selection_changed(&route);
        }
        let change = NavChange { back: false };
        for observer in &mut self.observers {
            observer.nav_changed(change);
        }
        true
    }

    async fn notify_router(&mut self) {
        if let Some(router) = self.router.as_mut() {
            router.nav_changed(NavChange { back: false }).await;
        }
    }

    /// First-`ready` initialization: assign slot ids, await content
    /// readiness, then run the initial-selection policy.
    async fn mount(&mut self) -> Result<(), OutletError> {
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "slot indices are 32-bit by design"
            )]
            let index = index as u32;
            tab.slot = Some(SlotId {
                outlet: self.id,
                index,
            });
            tab.content.ready().await.map_err(OutletError::activation)?;
        }
        self.init_select().await
    }

    async fn init_select(&mut self) -> Result<(), OutletError> {
        if self.router.is_some() {
            if self.tabs.iter().any(|t| t.flags.contains(TabFlags::SELECTED)) {
                tracing::warn!(
                    "pre-selected tabs make no difference when a router is present; \
                     define routes to pick the selected tab"
                );
            }
            return Ok(());
        }
        // Prefer an explicitly pre-selected tab, else the first shown,
        // enabled one.
        let selected = self
            .tabs
            .iter()
            .position(|t| t.flags.contains(TabFlags::SELECTED))
            .or_else(|| {
                self.tabs.iter().position(|t| {
                    t.flags.contains(TabFlags::SHOWN) && !t.flags.contains(TabFlags::DISABLED)
                })
            });
        // Reset the rest so none is selected.
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if selected != Some(i) {
                tab.flags.remove(TabFlags::SELECTED);
            }
        }
        if let Some(idx) = selected {
            let tab = &mut self.tabs[idx];
            tab.content
                .activate()
                .await
                .map_err(OutletError::activation)?;
            self.selected = Some(idx);
            self.tabs[idx]
                .flags
                .insert(TabFlags::SELECTED | TabFlags::ACTIVE);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<K: Copy> NavOutlet<K> for Tabs<K> {
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
        let Some(idx) = self.resolve(TabTarget::Id(id)) else {
            return Ok(RouteWrite::unchanged());
        };
        if !self.should_switch(idx) {
            return Ok(RouteWrite::unchanged());
        }
        self.set_active(idx).await?;
        // Router-driven: the router already knows, so no notify; the switch
        // finalizes when the caller redeems the token.
        Ok(RouteWrite::deferred())
    }

    fn route_id(&self) -> Option<RouteId> {
        self.selected
            .map(|i| RouteId::new(self.tabs[i].route.clone()))
    }

    fn container(&self) -> Option<K> {
        self.selected.and_then(|i| self.tabs[i].pane)
    }

    fn mark_visible(&mut self, _pending: PendingVisibility) {
        let _ = self.finish_switch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullRouterLink;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<String>>>;

    struct Recorder(Events);

    impl OutletObserver for Recorder {
        fn selection_changed(&mut self, selected: &RouteId) {
            self.0.borrow_mut().push(format!("sel:{}", selected.id));
        }

        fn nav_changed(&mut self, change: NavChange) {
            self.0.borrow_mut().push(format!("nav:back={}", change.back));
        }
    }

    struct CountingRouter(Rc<RefCell<u32>>);

    #[async_trait(?Send)]
    impl RouterLink for CountingRouter {
        async fn nav_changed(&mut self, _change: NavChange) {
            *self.0.borrow_mut() += 1;
        }
    }

    struct FailingContent;

    #[async_trait(?Send)]
    impl ContentHooks for FailingContent {
        async fn activate(&mut self) -> Result<(), crate::content::ContentError> {
            Err("pane refused to mount".into())
        }
    }

    fn three_tabs() -> (Tabs<u32>, Events) {
        let mut ids = IdAllocator::new();
        let mut tabs = Tabs::new(&mut ids);
        tabs.add_tab(Tab::new("a").with_pane(10));
        tabs.add_tab(Tab::new("b").with_pane(11));
        tabs.add_tab(Tab::new("c").with_pane(12));
        let events: Events = Rc::default();
        tabs.observe(Box::new(Recorder(Rc::clone(&events))));
        (tabs, events)
    }

    #[test]
    fn mount_selects_preselected_tab() {
        let mut ids = IdAllocator::new();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids);
        tabs.add_tab(Tab::new("a"));
        tabs.add_tab(Tab::new("b").preselected());
        block_on(tabs.ready()).unwrap();

        assert_eq!(tabs.selected_index(), Some(1));
        assert!(tabs.tabs()[1].flags().contains(TabFlags::ACTIVE));
        assert!(!tabs.tabs()[0].flags().contains(TabFlags::SELECTED));
    }

    #[test]
    fn mount_falls_back_to_first_enabled_shown_tab() {
        let mut ids = IdAllocator::new();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids);
        tabs.add_tab(Tab::new("a").disabled());
        tabs.add_tab(Tab::new("b").hidden());
        tabs.add_tab(Tab::new("c"));
        block_on(tabs.ready()).unwrap();

        assert_eq!(tabs.selected_index(), Some(2));
    }

    #[test]
    fn mount_with_no_candidate_selects_nothing() {
        let mut ids = IdAllocator::new();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids);
        tabs.add_tab(Tab::new("a").disabled());
        block_on(tabs.ready()).unwrap();

        assert_eq!(tabs.selected_index(), None);
        assert!(tabs.route_id().is_none());
        assert!(tabs.container().is_none());
    }

    #[test]
    fn router_presence_disables_preselection() {
        let mut ids = IdAllocator::new();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
        tabs.add_tab(Tab::new("a").preselected());
        block_on(tabs.ready()).unwrap();

        // The router is authoritative; the marker only produces a warning.
        assert_eq!(tabs.selected_index(), None);
    }

    #[test]
    fn mount_assigns_slot_ids() {
        let mut ids = IdAllocator::new();
        // Burn one id so the outlet is t-1.
        let _ = ids.allocate();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids);
        tabs.add_tab(Tab::new("a"));
        tabs.add_tab(Tab::new("b"));
        block_on(tabs.ready()).unwrap();

        let slots: Vec<_> = tabs
            .tabs()
            .iter()
            .map(|t| t.slot().unwrap().to_string())
            .collect();
        assert_eq!(slots, vec!["t-1-0", "t-1-1"]);
    }

    #[test]
    fn select_switches_and_notifies_once() {
        let (mut tabs, events) = three_tabs();
        let calls = Rc::new(RefCell::new(0));
        tabs.router = Some(Box::new(CountingRouter(Rc::clone(&calls))));
        block_on(tabs.ready()).unwrap();

        let changed = block_on(tabs.select(TabTarget::Id("b"))).unwrap();
        assert!(changed);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(*events.borrow(), vec!["sel:b", "nav:back=false"]);
        assert_eq!(tabs.selected_tab().unwrap().route(), "b");
    }

    #[test]
    fn reselecting_the_active_tab_is_a_noop() {
        let (mut tabs, events) = three_tabs();
        block_on(tabs.ready()).unwrap();
        block_on(tabs.select(TabTarget::Id("b"))).unwrap();
        events.borrow_mut().clear();

        let changed = block_on(tabs.select(TabTarget::Id("b"))).unwrap();
        assert!(!changed);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn unresolved_target_is_a_noop_not_an_error() {
        let (mut tabs, events) = three_tabs();
        block_on(tabs.ready()).unwrap();
        events.borrow_mut().clear();

        let changed = block_on(tabs.select(TabTarget::Id("missing"))).unwrap();
        assert!(!changed);
        let changed = block_on(tabs.select(TabTarget::Index(99))).unwrap();
        assert!(!changed);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn set_route_id_defers_finalize_and_notifications() {
        let (mut tabs, events) = three_tabs();
        let calls = Rc::new(RefCell::new(0));
        tabs.router = Some(Box::new(CountingRouter(Rc::clone(&calls))));
        block_on(tabs.ready()).unwrap();

        let write = block_on(tabs.set_route_id("b", None, Direction::Forward)).unwrap();
        assert!(write.changed);
        assert!(tabs.is_transitioning());
        // Entering tab is mounted but the switch has not settled.
        assert!(tabs.tabs()[1].flags().contains(TabFlags::ACTIVE));
        assert!(!tabs.tabs()[1].flags().contains(TabFlags::SELECTED));
        assert!(events.borrow().is_empty());
        // Router-driven writes never notify the router back.
        assert_eq!(*calls.borrow(), 0);

        tabs.mark_visible(write.visibility.unwrap());
        assert!(!tabs.is_transitioning());
        assert!(tabs.tabs()[1].flags().contains(TabFlags::SELECTED));
        assert_eq!(*events.borrow(), vec!["sel:b", "nav:back=false"]);
    }

    #[test]
    fn repeated_set_route_id_is_unchanged() {
        let (mut tabs, _events) = three_tabs();
        block_on(tabs.ready()).unwrap();
        let write = block_on(tabs.set_route_id("b", None, Direction::Forward)).unwrap();
        tabs.mark_visible(write.visibility.unwrap());

        let write = block_on(tabs.set_route_id("b", None, Direction::Forward)).unwrap();
        assert!(!write.changed);
        assert!(write.visibility.is_none());
    }

    #[test]
    fn requests_during_an_unfinalized_transition_are_rejected() {
        let (mut tabs, events) = three_tabs();
        block_on(tabs.ready()).unwrap();

        let write = block_on(tabs.set_route_id("b", None, Direction::Forward)).unwrap();
        // The first transition is still in flight until the token is
        // redeemed; further requests must be rejected, not queued.
        let second = block_on(tabs.select(TabTarget::Id("c")));
        assert!(matches!(second, Err(OutletError::Transitioning)));
        let third = block_on(tabs.set_route_id("c", None, Direction::Forward));
        assert!(matches!(third, Err(OutletError::Transitioning)));

        // The original switch is unaffected and settles normally.
        tabs.mark_visible(write.visibility.unwrap());
        assert_eq!(tabs.selected_tab().unwrap().route(), "b");
        assert_eq!(*events.borrow(), vec!["sel:b", "nav:back=false"]);

        let changed = block_on(tabs.select(TabTarget::Id("c"))).unwrap();
        assert!(changed);
    }

    #[test]
    fn leaving_and_entering_tabs_overlap_while_transitioning() {
        let (mut tabs, _events) = three_tabs();
        block_on(tabs.ready()).unwrap();
        block_on(tabs.select(TabTarget::Id("a"))).unwrap();

        let write = block_on(tabs.set_route_id("b", None, Direction::Forward)).unwrap();
        assert!(tabs.tabs()[0].flags().contains(TabFlags::ACTIVE));
        assert!(tabs.tabs()[1].flags().contains(TabFlags::ACTIVE));

        tabs.mark_visible(write.visibility.unwrap());
        assert!(!tabs.tabs()[0].flags().contains(TabFlags::ACTIVE));
        assert!(tabs.tabs()[1].flags().contains(TabFlags::ACTIVE));
    }

    #[test]
    fn activation_failure_leaves_the_container_transitioning() {
        let mut ids = IdAllocator::new();
        let mut tabs: Tabs<u32> = Tabs::new(&mut ids).with_router(Box::new(NullRouterLink));
        tabs.add_tab(Tab::new("a"));
        tabs.add_tab(Tab::new("b").with_content(Box::new(FailingContent)));
        block_on(tabs.ready()).unwrap();

        let err = block_on(tabs.set_route_id("b", None, Direction::Forward));
        assert!(matches!(err, Err(OutletError::Activation(_))));
        // Known sharp edge: no rollback; the container stays transitioning
        // and rejects further requests until the embedder intervenes.
        assert!(tabs.is_transitioning());
        let next = block_on(tabs.select(TabTarget::Id("a")));
        assert!(matches!(next, Err(OutletError::Transitioning)));
    }

    #[test]
    fn container_is_the_active_tabs_pane() {
        let (mut tabs, _events) = three_tabs();
        block_on(tabs.ready()).unwrap();
        block_on(tabs.select(TabTarget::Id("c"))).unwrap();
        assert_eq!(NavOutlet::container(&tabs), Some(12));
        assert_eq!(tabs.route_id().unwrap().id, "c");
    }
}
