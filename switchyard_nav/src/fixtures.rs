// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test doubles: a scriptable outlet and a map-backed host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::outlet::{NavOutlet, OutletHost};
use crate::types::{Direction, OutletError, ParamMap, PendingVisibility, RouteId, RouteWrite};

/// Shared call log, appended to in the order operations actually ran.
pub(crate) type Log = Rc<RefCell<Vec<String>>>;

pub(crate) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Scriptable outlet double. Records `ready`/`set`/`reveal` calls and flips
/// its active id the way a real container would.
pub(crate) struct FakeOutlet<K = u32> {
    name: &'static str,
    active: Option<String>,
    child: Option<K>,
    log: Option<Log>,
    fail_set_on: Option<&'static str>,
    fail_ready: bool,
}

impl<K> FakeOutlet<K> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            active: None,
            child: None,
            log: None,
            fail_set_on: None,
            fail_ready: false,
        }
    }

    pub(crate) fn child(mut self, child: K) -> Self {
        self.child = Some(child);
        self
    }

    pub(crate) fn active(mut self, id: &str) -> Self {
        self.active = Some(id.to_owned());
        self
    }

    pub(crate) fn log(mut self, log: &Log) -> Self {
        self.log = Some(Rc::clone(log));
        self
    }

    pub(crate) fn fail_set_on(mut self, id: &'static str) -> Self {
        self.fail_set_on = Some(id);
        self
    }

    pub(crate) fn fail_ready(mut self) -> Self {
        self.fail_ready = true;
        self
    }

    pub(crate) fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn record(&self, entry: String) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(entry);
        }
    }
}

#[async_trait(?Send)]
impl<K: Copy> NavOutlet<K> for FakeOutlet<K> {
    async fn ready(&mut self) -> Result<(), OutletError> {
        if self.fail_ready {
            return Err(OutletError::activation("not ready"));
        }
        self.record(format!("ready:{}", self.name));
        Ok(())
    }

    async fn set_route_id(
        &mut self,
        id: &str,
        _params: Option<&ParamMap>,
        direction: Direction,
    ) -> Result<RouteWrite, OutletError> {
        if self.fail_set_on == Some(id) {
            return Err(OutletError::activation("activation refused"));
        }
        let changed = self.active.as_deref() != Some(id);
        self.record(format!(
            "set:{}:{}:{:?}:changed={}",
            self.name, id, direction, changed
        ));
        if !changed {
            return Ok(RouteWrite::unchanged());
        }
        self.active = Some(id.to_owned());
        Ok(RouteWrite::deferred())
    }

    fn route_id(&self) -> Option<RouteId> {
        self.active.as_deref().map(RouteId::new)
    }

    fn container(&self) -> Option<K> {
        if self.active.is_some() { self.child } else { None }
    }

    fn mark_visible(&mut self, _pending: PendingVisibility) {
        self.record(format!("reveal:{}", self.name));
    }
}

/// Map-backed host over `u32` keys.
pub(crate) struct FakeHost {
    children: HashMap<u32, Vec<u32>>,
    outlets: HashMap<u32, FakeOutlet>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self {
            children: HashMap::new(),
            outlets: HashMap::new(),
        }
    }

    pub(crate) fn link(&mut self, parent: u32, children: &[u32]) {
        self.children.insert(parent, children.to_vec());
    }

    pub(crate) fn add_outlet(&mut self, at: u32, outlet: FakeOutlet) {
        self.outlets.insert(at, outlet);
    }

    pub(crate) fn fake(&self, at: u32) -> &FakeOutlet {
        &self.outlets[&at]
    }
}

impl OutletHost for FakeHost {
    type Key = u32;

    fn children(&self, of: u32) -> &[u32] {
        self.children.get(&of).map_or(&[], Vec::as_slice)
    }

    fn outlet(&self, at: u32) -> Option<&dyn NavOutlet<u32>> {
        self.outlets.get(&at).map(|o| o as &dyn NavOutlet<u32>)
    }

    fn outlet_mut(&mut self, at: u32) -> Option<&mut dyn NavOutlet<u32>> {
        self.outlets.get_mut(&at).map(|o| o as &mut dyn NavOutlet<u32>)
    }
}
