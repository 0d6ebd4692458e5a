//! The system orchestrator.
//!
//! A [`System`] owns a mapping from unique names to component registrations
//! and drives their lifecycle: start in dependency order, shutdown in the
//! exact reverse order. A system is itself a [`Component`], so whole
//! subsystems nest inside an enclosing map under a single name.

use std::sync::Arc;

use hashbrown::HashMap;
use lattice_component::{Component, ComponentError, Registration, Registry, SharedComponent};

use crate::error::SystemError;
use crate::graph::{DependencyGraph, Node};

/// Mapping from unique component name to its registration.
///
/// Keys are the canonical names used for dependency resolution. Insertion
/// order is irrelevant; ordering is derived from the declared dependencies.
pub type SystemMap = HashMap<String, Registration>;

// ─────────────────────────────────────────────────────────────────────────────
// SystemState
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle state of a [`System`].
///
/// The state progresses linearly: `Initialized` → `Started` → `Terminated`.
/// It only advances after a full, uninterrupted pass — a failed pass leaves
/// it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemState {
    /// Constructed but not yet started.
    #[default]
    Initialized,
    /// A full start pass completed.
    Started,
    /// A full shutdown pass completed.
    Terminated,
}

// ─────────────────────────────────────────────────────────────────────────────
// System
// ─────────────────────────────────────────────────────────────────────────────

/// Orchestrates the lifecycle of a named collection of components.
///
/// The system holds the name → component mapping, derives the dependency
/// graph from it on every query, and drives `start`/`shutdown` across all
/// components in a valid order. Components receive the system itself as a
/// read-only [`Registry`] during start, so they can reach the live instances
/// of their dependencies.
///
/// # Example
///
/// ```
/// use lattice_component::prelude::*;
/// use lattice_system::prelude::*;
///
/// #[derive(Default)]
/// struct Database {
///     connected: bool,
/// }
///
/// impl Component for Database {
///     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
///         self.connected = true;
///         Ok(())
///     }
///
///     fn shutdown(&mut self) -> Result<(), ComponentError> {
///         self.connected = false;
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct ApiService;
///
/// impl Component for ApiService {
///     fn start(&mut self, registry: &dyn Registry) -> Result<(), ComponentError> {
///         // The database is guaranteed to have started already.
///         registry
///             .get("database")
///             .ok_or_else(|| ComponentError::startup("database is not registered"))?;
///         Ok(())
///     }
///
///     fn shutdown(&mut self) -> Result<(), ComponentError> {
///         Ok(())
///     }
/// }
///
/// let mut system_map = SystemMap::new();
/// system_map.insert("database".to_string(), Registration::new(Database::default()));
/// system_map.insert("api".to_string(), ApiService::default().using(["database"]));
///
/// let mut system = System::new(system_map);
/// system.start()?;
/// assert_eq!(system.state(), SystemState::Started);
///
/// system.shutdown()?;
/// assert_eq!(system.state(), SystemState::Terminated);
/// # Ok::<(), lattice_system::SystemError>(())
/// ```
pub struct System {
    /// The canonical name → component mapping.
    system_map: SystemMap,
    /// Orchestration progress.
    state: SystemState,
}

impl System {
    /// Creates a system over a complete component map.
    ///
    /// The map is treated as immutable from here on; nothing validates it
    /// until a graph query or lifecycle pass runs.
    #[must_use]
    pub fn new(system_map: SystemMap) -> Self {
        Self {
            system_map,
            state: SystemState::Initialized,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Returns the name → component mapping.
    #[must_use]
    pub fn system_map(&self) -> &SystemMap {
        &self.system_map
    }

    /// Builds the dependency graph for the current map.
    ///
    /// The graph is derived fresh on every call; it is never cached.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DependencyNotFound`] if any component declares
    /// a dependency absent from the map.
    pub fn graph(&self) -> Result<DependencyGraph, SystemError> {
        DependencyGraph::from_map(&self.system_map)
    }

    /// Computes the order in which components must be started.
    ///
    /// Shutdown uses exactly this sequence read backwards.
    ///
    /// # Errors
    ///
    /// Propagates [`SystemError::DependencyNotFound`] from graph
    /// construction and [`SystemError::CircularDependency`] from the sort.
    pub fn initialization_order(&self) -> Result<Vec<Node>, SystemError> {
        self.graph()?.initialization_order()
    }

    /// Looks up a component by name.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::ComponentNotFound`] if no component is
    /// registered under `name`.
    pub fn get_component(&self, name: &str) -> Result<SharedComponent, SystemError> {
        self.system_map
            .get(name)
            .map(|registration| Arc::clone(registration.component()))
            .ok_or_else(|| SystemError::ComponentNotFound(name.to_string()))
    }

    /// Starts every component, dependencies before dependents.
    ///
    /// Each component receives this system as its name-lookup registry. The
    /// first failure is returned immediately: remaining components are not
    /// started, already-started components are not rolled back, and the
    /// state is left unchanged. On full success the state becomes
    /// [`SystemState::Started`].
    ///
    /// # Errors
    ///
    /// Any graph error, or [`SystemError::Lifecycle`] wrapping the first
    /// hook failure.
    pub fn start(&mut self) -> Result<(), SystemError> {
        let order = self.initialization_order()?;

        for node in &order {
            tracing::debug!(component = node.name(), "starting component");
            node.component().lock().start(&*self).map_err(|source| {
                tracing::warn!(component = node.name(), "start pass aborted");
                SystemError::Lifecycle {
                    name: node.name().to_string(),
                    phase: "start",
                    source,
                }
            })?;
        }

        self.state = SystemState::Started;
        tracing::info!(components = order.len(), "system started");
        Ok(())
    }

    /// Shuts down every component, dependents before dependencies.
    ///
    /// The sequence is the initialization order read backwards. The first
    /// failure is returned immediately and leaves the state unchanged; after
    /// a full pass the state becomes [`SystemState::Terminated`].
    ///
    /// # Errors
    ///
    /// Any graph error, or [`SystemError::Lifecycle`] wrapping the first
    /// hook failure.
    pub fn shutdown(&mut self) -> Result<(), SystemError> {
        let mut order = self.initialization_order()?;
        order.reverse();

        for node in &order {
            tracing::debug!(component = node.name(), "shutting down component");
            node.component().lock().shutdown().map_err(|source| {
                tracing::warn!(component = node.name(), "shutdown pass aborted");
                SystemError::Lifecycle {
                    name: node.name().to_string(),
                    phase: "shutdown",
                    source,
                }
            })?;
        }

        self.state = SystemState::Terminated;
        tracing::info!(components = order.len(), "system terminated");
        Ok(())
    }
}

/// The narrow lookup view handed to start hooks.
impl Registry for System {
    fn get(&self, name: &str) -> Option<SharedComponent> {
        self.system_map
            .get(name)
            .map(|registration| Arc::clone(registration.component()))
    }
}

/// Systems are themselves components, so they nest: a whole subsystem can be
/// registered in an enclosing map under a single name and is driven like any
/// other component.
///
/// The enclosing registry is ignored — a nested system resolves names in its
/// own map.
impl Component for System {
    fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
        System::start(self).map_err(ComponentError::other)
    }

    fn shutdown(&mut self) -> Result<(), ComponentError> {
        System::shutdown(self).map_err(ComponentError::other)
    }
}
