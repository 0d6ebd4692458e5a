//! Component registration and dependency declaration.
//!
//! A [`Registration`] is what a system map actually holds: the shared handle
//! to a component together with the ordered list of names it depends on.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::component::{Component, SharedComponent};

/// A component plus the names of the components it depends on.
///
/// Registrations are created from a concrete component (usually via
/// [`ComponentExt::using`](crate::component::ComponentExt::using)) and handed
/// to an orchestrator inside a name-keyed map. The dependency list is purely
/// declarative — nothing is resolved or validated until the orchestrator
/// builds its graph.
///
/// # Example
///
/// ```
/// use lattice_component::prelude::*;
///
/// struct Cache;
///
/// impl Component for Cache {
///     fn start(&mut self, _registry: &dyn Registry) -> Result<(), ComponentError> {
///         Ok(())
///     }
///
///     fn shutdown(&mut self) -> Result<(), ComponentError> {
///         Ok(())
///     }
/// }
///
/// let registration = Registration::new(Cache).using(["database"]);
/// assert_eq!(registration.dependencies(), ["database"]);
/// ```
pub struct Registration {
    /// The registered component.
    component: SharedComponent,
    /// Names of the components this one depends on, in declaration order.
    dependencies: Vec<String>,
}

impl Registration {
    /// Wraps a concrete component with an empty dependency list.
    #[must_use]
    pub fn new<C: Component>(component: C) -> Self {
        let component: SharedComponent = Arc::new(Mutex::new(component));
        Self {
            component,
            dependencies: Vec::new(),
        }
    }

    /// Wraps an existing shared handle with an empty dependency list.
    ///
    /// Use this to keep an observing handle to the component after the map
    /// has been handed to an orchestrator.
    #[must_use]
    pub fn from_shared(component: SharedComponent) -> Self {
        Self {
            component,
            dependencies: Vec::new(),
        }
    }

    /// Replaces the dependency list with the given names.
    ///
    /// The entire list is replaced: calling `using` twice keeps only the
    /// second list. Returns the registration for chained configuration.
    #[must_use]
    pub fn using<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the shared handle to the registered component.
    #[must_use]
    pub fn component(&self) -> &SharedComponent {
        &self.component
    }

    /// Returns the declared dependency names, in declaration order.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}
