//! Declarative route-table configuration
//!
//! Queues are referenced by name; the dispatcher builder resolves the names
//! against the handles registered at build time.

use serde::{Deserialize, Serialize};

/// Route table for one dispatcher, typically deserialized from config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig<K> {
    /// Diagnostic name for the dispatcher
    pub name: String,
    /// Explicit kind -> queue bindings
    #[serde(default)]
    pub routes: Vec<RouteBinding<K>>,
    /// Queue receiving kinds with no explicit binding
    #[serde(default)]
    pub default_queue: Option<String>,
}

/// One kind -> named-queue binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteBinding<K> {
    pub kind: K,
    pub queue: String,
}
