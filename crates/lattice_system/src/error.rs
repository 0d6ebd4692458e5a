//! Error types for graph construction and orchestration.

use lattice_component::ComponentError;
use thiserror::Error;

/// Errors surfaced to the caller of a system's graph queries and lifecycle
/// passes.
///
/// All failures are fail-fast: the first one aborts the current pass,
/// remaining components are skipped, and no partial result is surfaced.
#[derive(Debug, Error)]
pub enum SystemError {
    /// A component declared a dependency that is not in the system map.
    ///
    /// Detected while building the graph, before any lifecycle call is made.
    #[error("component '{component}' depends on '{dependency}' which is not in the system map")]
    DependencyNotFound {
        /// The component that declared the dependency.
        component: String,
        /// The name that did not resolve.
        dependency: String,
    },

    /// The dependency graph contains a cycle, so no valid initialization
    /// order exists.
    ///
    /// Detected during order computation, before any lifecycle call is made.
    #[error("circular dependency detected among components {members:?}; cannot determine initialization order")]
    CircularDependency {
        /// Names of the components left unordered by the cycle.
        members: Vec<String>,
    },

    /// A lookup by name found no registered component.
    #[error("component '{0}' not found in system map")]
    ComponentNotFound(String),

    /// A component's lifecycle hook failed, aborting the pass.
    #[error("component '{name}' failed during {phase}")]
    Lifecycle {
        /// The name of the failing component.
        name: String,
        /// Which pass was running ("start" or "shutdown").
        phase: &'static str,
        /// The error the hook returned, unchanged.
        #[source]
        source: ComponentError,
    },
}
