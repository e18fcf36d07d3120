//! Dispatcher error types

use thiserror::Error;

/// Route-table construction errors.
///
/// Only the config-driven build path can fail; a live dispatcher reports
/// unroutable messages through [`crate::Dispatcher::dispatch`]'s boolean
/// return instead of an error value.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Binding references a queue name that was never registered
    #[error("route for kind {kind} references unknown queue '{queue}'")]
    UnknownQueue { queue: String, kind: String },

    /// Default route references a queue name that was never registered
    #[error("default route references unknown queue '{queue}'")]
    UnknownDefaultQueue { queue: String },

    /// Dispatcher name missing from config
    #[error("dispatcher name must not be empty")]
    EmptyName,
}

impl RouterError {
    /// Create an unknown-queue error for a kind binding
    pub fn unknown_queue(queue: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownQueue {
            queue: queue.into(),
            kind: kind.into(),
        }
    }

    /// Create an unknown-queue error for the default route
    pub fn unknown_default_queue(queue: impl Into<String>) -> Self {
        Self::UnknownDefaultQueue {
            queue: queue.into(),
        }
    }
}
