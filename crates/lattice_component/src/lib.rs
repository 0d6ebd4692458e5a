//! The component lifecycle contract for Lattice (Layer 1).
//!
//! `lattice_component` provides the core abstractions for units of runtime
//! state that need explicit lifecycle management:
//!
//! - [`Component`](component::Component) - the `{start, shutdown}` contract
//! - [`Registry`](component::Registry) - read-only name lookup passed to start hooks
//! - [`Registration`](registration::Registration) - a component plus its declared dependency names
//! - [`ComponentError`](error::ComponentError) - failures raised by lifecycle hooks
//!
//! Components declare, by name, which other components must be running before
//! they start. The declarations are opaque strings at this layer; resolving
//! them against a map and deriving a valid order is Layer 2's job.
//!
//! # Architecture
//!
//! This crate is Layer 1 of the Lattice architecture:
//!
//! - **Layer 1** (`lattice_component`): component lifecycle contract (this crate)
//! - **Layer 2** (`lattice_system`): dependency graph and orchestration
//!
//! # Example
//!
//! ```
//! use lattice_component::prelude::*;
//!
//! struct Cache {
//!     warmed: bool,
//! }
//!
//! impl Component for Cache {
//!     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
//!         self.warmed = true;
//!         Ok(())
//!     }
//!
//!     fn shutdown(&mut self) -> Result<(), ComponentError> {
//!         self.warmed = false;
//!         Ok(())
//!     }
//! }
//!
//! let registration = Cache { warmed: false }.using(["database"]);
//! assert_eq!(registration.dependencies(), ["database"]);
//! ```

/// The component trait and the lookup capability passed to start hooks.
pub mod component;

/// Error types for component lifecycle hooks.
pub mod error;

/// Component registration and dependency declaration.
pub mod registration;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::component::{Component, ComponentExt, Registry, SharedComponent, shared};
    pub use crate::error::ComponentError;
    pub use crate::registration::Registration;
}

// Re-export key types at crate root for convenience
pub use component::{Component, ComponentExt, Registry, SharedComponent, shared};
pub use error::ComponentError;
pub use registration::Registration;
