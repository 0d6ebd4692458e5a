//! The component lifecycle contract.
//!
//! A [`Component`] is a unit of runtime state with explicit lifecycle
//! management: it is started after all of its dependencies and shut down
//! before any of them. Components do no graph work themselves — an
//! orchestrator resolves their declared dependency names and drives the
//! hooks in a valid order.

use std::sync::Arc;

use downcast_rs::{Downcast, impl_downcast};
use parking_lot::Mutex;

use crate::error::ComponentError;
use crate::registration::Registration;

/// Shared handle to a component held in a system map.
///
/// The same handle is held by the orchestrator's map and by any sibling that
/// looks the component up during start, so components live behind an
/// `Arc<Mutex<_>>`. Orchestration itself is strictly serial; the lock is
/// taken for one component at a time.
pub type SharedComponent = Arc<Mutex<dyn Component>>;

// ─────────────────────────────────────────────────────────────────────────────
// Component Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A unit of runtime lifecycle management.
///
/// Concrete components are database handles, caches, clients of external
/// services — anything that owns runtime state and must be brought up and
/// torn down at a well-defined point relative to the components it depends
/// on. An orchestrator is itself a `Component`, so whole systems nest.
///
/// Dependencies are declared by name via
/// [`ComponentExt::using`]; the trait itself carries only the two lifecycle
/// hooks.
///
/// # Example
///
/// ```
/// use lattice_component::component::{Component, Registry};
/// use lattice_component::error::ComponentError;
///
/// struct Database {
///     url: String,
///     connected: bool,
/// }
///
/// impl Component for Database {
///     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
///         // open connections, allocate resources, ...
///         self.connected = true;
///         Ok(())
///     }
///
///     fn shutdown(&mut self) -> Result<(), ComponentError> {
///         self.connected = false;
///         Ok(())
///     }
/// }
/// ```
pub trait Component: Downcast + Send {
    /// Connects the component to its resources.
    ///
    /// Called by an orchestrator after every dependency of this component
    /// has successfully started. The `registry` resolves sibling components
    /// by name, so a hook can reach the live instances of its dependencies,
    /// not just their names.
    ///
    /// Any error aborts the orchestrator's start pass immediately; remaining
    /// components are not started and nothing already started is rolled back.
    fn start(&mut self, registry: &dyn Registry) -> Result<(), ComponentError>;

    /// Gracefully disconnects the component from its resources.
    ///
    /// Called by an orchestrator before any of this component's dependencies
    /// are shut down. Any error aborts the shutdown pass immediately.
    fn shutdown(&mut self) -> Result<(), ComponentError>;
}

impl_downcast!(Component);

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only name-to-instance lookup passed to [`Component::start`].
///
/// This is deliberately narrower than the orchestrator that implements it:
/// component code can fetch the live instance of a dependency but gains no
/// control over orchestration (no way to trigger a nested start or
/// shutdown).
///
/// A hook must not lock the component currently being driven — the handle it
/// would fetch for itself is already held by the orchestration pass.
///
/// # Example
///
/// ```ignore
/// fn start(&mut self, registry: &dyn Registry) -> Result<(), ComponentError> {
///     let database = registry
///         .get("database")
///         .ok_or_else(|| ComponentError::startup("database is not registered"))?;
///     let guard = database.lock();
///     let database = guard
///         .downcast_ref::<Database>()
///         .ok_or_else(|| ComponentError::startup("'database' is not a Database"))?;
///     self.pool = database.pool_handle();
///     Ok(())
/// }
/// ```
pub trait Registry {
    /// Looks up a component by name.
    ///
    /// Returns `None` if no component is registered under `name`.
    fn get(&self, name: &str) -> Option<SharedComponent>;
}

// ─────────────────────────────────────────────────────────────────────────────
// ComponentExt
// ─────────────────────────────────────────────────────────────────────────────

/// Extension methods for concrete component types.
pub trait ComponentExt: Component + Sized {
    /// Declares the components this one depends on, by name.
    ///
    /// Wraps the component into a [`Registration`] carrying the dependency
    /// list. Names are opaque strings at this point — nothing is validated
    /// until an orchestrator resolves them against its map.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let cache = Cache::new().using(["database"]);
    /// let api = ApiService::new().using(["database", "cache"]);
    /// ```
    fn using<I, S>(self, dependencies: I) -> Registration
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Registration::new(self).using(dependencies)
    }

    /// Wraps the component into a [`Registration`] with no dependencies.
    fn into_registration(self) -> Registration {
        Registration::new(self)
    }
}

impl<C: Component> ComponentExt for C {}

/// Wraps a concrete component into a [`SharedComponent`] handle.
#[must_use]
pub fn shared<C: Component>(component: C) -> SharedComponent {
    Arc::new(Mutex::new(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        started: bool,
        shutdown_called: bool,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                started: false,
                shutdown_called: false,
            }
        }
    }

    impl Component for Probe {
        fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
            self.started = true;
            Ok(())
        }

        fn shutdown(&mut self) -> Result<(), ComponentError> {
            self.shutdown_called = true;
            Ok(())
        }
    }

    struct EmptyRegistry;

    impl Registry for EmptyRegistry {
        fn get(&self, _name: &str) -> Option<SharedComponent> {
            None
        }
    }

    #[test]
    fn lifecycle_hooks_can_be_called_directly() {
        let mut probe = Probe::new();

        probe.start(&EmptyRegistry).expect("start");
        assert!(probe.started);

        probe.shutdown().expect("shutdown");
        assert!(probe.shutdown_called);
    }

    #[test]
    fn using_lifts_a_component_into_a_registration() {
        let registration = Probe::new().using(["database", "cache"]);
        assert_eq!(registration.dependencies(), ["database", "cache"]);
    }

    #[test]
    fn into_registration_has_no_dependencies() {
        let registration = Probe::new().into_registration();
        assert!(registration.dependencies().is_empty());
    }

    #[test]
    fn shared_handle_supports_downcast() {
        let handle = shared(Probe::new());

        let guard = handle.lock();
        assert!(guard.is::<Probe>());
        let probe = guard.downcast_ref::<Probe>().expect("concrete type");
        assert!(!probe.started);
    }

    #[test]
    fn downcast_to_wrong_type_returns_none() {
        struct Other;

        impl Component for Other {
            fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
                Ok(())
            }

            fn shutdown(&mut self) -> Result<(), ComponentError> {
                Ok(())
            }
        }

        let handle = shared(Probe::new());
        assert!(handle.lock().downcast_ref::<Other>().is_none());
    }
}
