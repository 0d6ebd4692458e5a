//! Error types for component lifecycle hooks.

use thiserror::Error;

/// Errors raised by a component's lifecycle hooks.
///
/// The orchestrator never catches or retries these: the first failure aborts
/// the current start or shutdown pass and reaches the orchestrator's caller
/// with this error preserved as the source.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The component failed to connect to its resources.
    #[error("startup error: {0}")]
    Startup(String),

    /// The component failed to release its resources.
    #[error("shutdown error: {0}")]
    Shutdown(String),

    /// Any other failure raised by a hook.
    #[error(transparent)]
    Other(#[from] Box<dyn core::error::Error + Send + Sync>),
}

impl ComponentError {
    /// Creates a [`Startup`](Self::Startup) error.
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }

    /// Creates a [`Shutdown`](Self::Shutdown) error.
    pub fn shutdown(msg: impl Into<String>) -> Self {
        Self::Shutdown(msg.into())
    }

    /// Wraps an arbitrary error raised by a hook.
    pub fn other(err: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(err))
    }
}
