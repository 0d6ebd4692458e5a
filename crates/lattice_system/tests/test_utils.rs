//! Shared test utilities for `lattice_system` integration tests.
//!
//! This module provides probe components that record their lifecycle
//! transitions into a shared log, plus helpers for building system maps.
//! Import via `mod test_utils;` in test files.

#![allow(
    dead_code,
    missing_docs,
    reason = "shared test utilities — not all items used in every test binary"
)]

use std::sync::{Arc, Mutex};

use lattice_component::prelude::*;
use lattice_system::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Event Log
// ─────────────────────────────────────────────────────────────────────────────

/// Records (component name, event) pairs in the order hooks ran.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<(String, &'static str)>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &str, event: &'static str) {
        self.events
            .lock()
            .expect("event log poisoned")
            .push((name.to_string(), event));
    }

    /// Names of components whose start hook ran, in order.
    pub fn started(&self) -> Vec<String> {
        self.filtered("start")
    }

    /// Names of components whose shutdown hook ran, in order.
    pub fn shut_down(&self) -> Vec<String> {
        self.filtered("shutdown")
    }

    /// True if no hook has run at all.
    pub fn is_empty(&self) -> bool {
        self.events.lock().expect("event log poisoned").is_empty()
    }

    fn filtered(&self, wanted: &str) -> Vec<String> {
        self.events
            .lock()
            .expect("event log poisoned")
            .iter()
            .filter(|(_, event)| *event == wanted)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Probe Components
// ─────────────────────────────────────────────────────────────────────────────

/// A component that records its lifecycle transitions into a shared log.
pub struct Probe {
    pub name: String,
    pub started: bool,
    pub shutdown_called: bool,
    log: EventLog,
}

impl Probe {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            started: false,
            shutdown_called: false,
            log: log.clone(),
        }
    }
}

impl Component for Probe {
    fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
        self.started = true;
        self.log.record(&self.name, "start");
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), ComponentError> {
        self.shutdown_called = true;
        self.log.record(&self.name, "shutdown");
        Ok(())
    }
}

/// Which hook a [`FailingProbe`] fails in.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Start,
    Shutdown,
}

/// A probe whose designated hook always fails; the other hook behaves like a
/// normal [`Probe`].
pub struct FailingProbe {
    inner: Probe,
    fail_on: FailOn,
}

impl FailingProbe {
    pub fn new(name: &str, log: &EventLog, fail_on: FailOn) -> Self {
        Self {
            inner: Probe::new(name, log),
            fail_on,
        }
    }
}

impl Component for FailingProbe {
    fn start(&mut self, registry: &dyn Registry) -> Result<(), ComponentError> {
        if self.fail_on == FailOn::Start {
            return Err(ComponentError::startup("probe told to fail"));
        }
        self.inner.start(registry)
    }

    fn shutdown(&mut self) -> Result<(), ComponentError> {
        if self.fail_on == FailOn::Shutdown {
            return Err(ComponentError::shutdown("probe told to fail"));
        }
        self.inner.shutdown()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Map Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a system map of probes sharing one log, from
/// (name, dependency names) pairs.
pub fn probe_map(log: &EventLog, components: &[(&str, &[&str])]) -> SystemMap {
    let mut map = SystemMap::new();
    for (name, dependencies) in components {
        map.insert(
            (*name).to_string(),
            Probe::new(name, log).using(dependencies.iter().copied()),
        );
    }
    map
}

/// Names of the nodes of an initialization order.
pub fn order_names(order: &[Node]) -> Vec<&str> {
    order.iter().map(Node::name).collect()
}
