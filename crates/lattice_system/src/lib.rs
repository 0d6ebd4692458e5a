//! Dependency resolution and lifecycle orchestration for Lattice (Layer 2).
//!
//! `lattice_system` turns a map of named component registrations into a
//! dependency graph, derives the initialization order, and drives start and
//! shutdown across the whole set:
//!
//! - [`DependencyGraph`] - directed dependent → dependency graph derived from a map
//! - [`System`] - the orchestrator; owns the map and the lifecycle state
//! - [`SystemError`] - unresolvable names, cycles, lookup misses, hook failures
//!
//! Starting a system starts every component after all of its dependencies;
//! shutting it down walks exactly the same sequence backwards, so dependents
//! are torn down before anything they rely on. Unsatisfiable maps — a
//! dependency name with no entry, or a cycle — fail before any lifecycle
//! hook runs.
//!
//! # Example
//!
//! ```
//! use lattice_component::prelude::*;
//! use lattice_system::prelude::*;
//!
//! struct Worker {
//!     running: bool,
//! }
//!
//! impl Component for Worker {
//!     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
//!         self.running = true;
//!         Ok(())
//!     }
//!
//!     fn shutdown(&mut self) -> Result<(), ComponentError> {
//!         self.running = false;
//!         Ok(())
//!     }
//! }
//!
//! let mut system_map = SystemMap::new();
//! system_map.insert("queue".to_string(), Registration::new(Worker { running: false }));
//! system_map.insert(
//!     "consumer".to_string(),
//!     Worker { running: false }.using(["queue"]),
//! );
//!
//! let mut system = System::new(system_map);
//! system.start()?;
//!
//! let order = system.initialization_order()?;
//! let names: Vec<_> = order.iter().map(|node| node.name().to_string()).collect();
//! assert_eq!(names, ["queue", "consumer"]);
//!
//! system.shutdown()?;
//! # Ok::<(), lattice_system::SystemError>(())
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 2 of the Lattice architecture:
//!
//! - **Layer 1** (`lattice_component`): component lifecycle contract
//! - **Layer 2** (`lattice_system`): dependency graph and orchestration (this crate)

/// Error types for graph construction and orchestration.
pub mod error;

/// Dependency graph construction and order computation.
pub mod graph;

/// The system orchestrator.
pub mod system;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::SystemError;
    pub use crate::graph::{DependencyGraph, Edge, Node, NodeId};
    pub use crate::system::{System, SystemMap, SystemState};
}

// Re-export key types at crate root for convenience
pub use error::SystemError;
pub use graph::{DependencyGraph, Edge, Node, NodeId};
pub use system::{System, SystemMap, SystemState};
