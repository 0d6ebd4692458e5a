//! Ordered lifecycle management for named, interdependent runtime components.
//!
//! Components declare, by name, which other components must be running before
//! they start. A [`System`](lattice_system::System) resolves those
//! declarations into a dependency graph, starts everything in a valid order,
//! and shuts the set down in the exact reverse order — dependents first.
//!
//! # Example
//!
//! ```
//! use lattice::prelude::*;
//!
//! #[derive(Default)]
//! struct Database {
//!     connected: bool,
//! }
//!
//! impl Component for Database {
//!     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
//!         self.connected = true;
//!         Ok(())
//!     }
//!
//!     fn shutdown(&mut self) -> Result<(), ComponentError> {
//!         self.connected = false;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Cache;
//!
//! impl Component for Cache {
//!     fn start(&mut self, registry: &dyn Registry) -> Result<(), ComponentError> {
//!         // Dependencies are live by the time this runs.
//!         registry
//!             .get("database")
//!             .ok_or_else(|| ComponentError::startup("database is not registered"))?;
//!         Ok(())
//!     }
//!
//!     fn shutdown(&mut self) -> Result<(), ComponentError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut system_map = SystemMap::new();
//! system_map.insert("database".to_string(), Registration::new(Database::default()));
//! system_map.insert("cache".to_string(), Cache::default().using(["database"]));
//!
//! let mut system = System::new(system_map);
//! system.start()?;
//! assert_eq!(system.state(), SystemState::Started);
//!
//! system.shutdown()?;
//! assert_eq!(system.state(), SystemState::Terminated);
//! # Ok::<(), lattice_system::SystemError>(())
//! ```

/// Layer 1: the component lifecycle contract.
pub use lattice_component;

/// Layer 2: dependency graph and orchestration.
pub use lattice_system;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use lattice_component::prelude::*;
    pub use lattice_system::prelude::*;
}
