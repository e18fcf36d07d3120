//! Type-keyed routing core

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use contracts::{MessageKind, MessageQueue, QueueHandle, RouterConfig};

use crate::error::RouterError;
use crate::metrics::{MetricsSnapshot, RouterMetrics};

/// Routes messages to per-kind queues with an optional default fallback.
///
/// The dispatcher owns only its diagnostic name and the route table itself.
/// Every stored [`QueueHandle`] is a shared reference to a queue managed
/// elsewhere; dropping the dispatcher releases the table and nothing more.
///
/// There is no internal locking. Registration takes `&mut self` and dispatch
/// takes `&self`, so single-threaded interleaving is free and concurrent use
/// requires an external lock (e.g. `Mutex<Dispatcher<_, _>>`) around the
/// instance. No method blocks or awaits.
pub struct Dispatcher<K, M> {
    name: String,
    routes: HashMap<K, QueueHandle<M>>,
    default_route: Option<QueueHandle<M>>,
    metrics: RouterMetrics,
}

impl<K, M> std::fmt::Debug for Dispatcher<K, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("route_count", &self.routes.len())
            .field("has_default_route", &self.default_route.is_some())
            .finish()
    }
}

impl<K: MessageKind, M> Dispatcher<K, M> {
    /// Create an empty dispatcher with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "dispatcher name must not be empty");

        Self {
            name,
            routes: HashMap::new(),
            default_route: None,
            metrics: RouterMetrics::new(),
        }
    }

    /// Dispatcher name as it appears in log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of explicit kind bindings.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Whether a default route is currently set.
    pub fn has_default_route(&self) -> bool {
        self.default_route.is_some()
    }

    /// Snapshot of the dispatch counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Bind `kind` to `queue`, replacing any previous binding.
    ///
    /// `None` removes the binding; removing an absent binding is a no-op.
    /// The table never stores an empty binding, so a later lookup hit always
    /// yields a live handle.
    pub fn register_route(&mut self, kind: K, queue: Option<QueueHandle<M>>) {
        match queue {
            Some(handle) => {
                if self.routes.insert(kind, handle).is_some() {
                    debug!(dispatcher = %self.name, kind = ?kind, "route overwritten");
                }
            }
            None => {
                self.routes.remove(&kind);
            }
        }
    }

    /// Replace the fallback queue for kinds with no explicit binding.
    ///
    /// `None` clears the fallback. Last write wins.
    pub fn register_default(&mut self, queue: Option<QueueHandle<M>>) {
        self.default_route = queue;
    }

    /// Route one message by kind.
    ///
    /// Resolves the explicit binding for `kind`, falling back to the default
    /// route, and hands the message to the resolved queue. The hand-off is
    /// fire-and-forget; the dispatcher never waits for the consumer.
    ///
    /// Returns `false` and drops the message when no queue resolves, or when
    /// the resolved queue rejects it. Both outcomes are logged with the
    /// dispatcher name and the kind, so a misconfigured table shows up as
    /// warnings rather than silence.
    pub fn dispatch(&self, kind: K, message: M) -> bool {
        let (target, via_default) = match self.routes.get(&kind) {
            Some(handle) => (Some(handle), false),
            None => (self.default_route.as_ref(), true),
        };

        let Some(queue) = target else {
            self.metrics.inc_unroutable();
            warn!(
                dispatcher = %self.name,
                kind = ?kind,
                "no handler for message kind, message dropped"
            );
            return false;
        };

        if let Err(e) = queue.enqueue(message) {
            self.metrics.inc_rejected();
            warn!(
                dispatcher = %self.name,
                kind = ?kind,
                queue = %queue.name(),
                error = %e,
                "enqueue failed, message dropped"
            );
            return false;
        }

        if via_default {
            self.metrics.inc_defaulted();
        } else {
            self.metrics.inc_routed();
        }
        true
    }
}

/// Builder wiring named queues into a [`RouterConfig`] route table.
///
/// Queues are registered under the names the config refers to; `build`
/// resolves every binding and fails on a dangling reference.
pub struct DispatcherBuilder<K, M> {
    config: RouterConfig<K>,
    queues: HashMap<String, QueueHandle<M>>,
}

impl<K: MessageKind, M> DispatcherBuilder<K, M> {
    /// Create a builder for the given route table.
    pub fn new(config: RouterConfig<K>) -> Self {
        Self {
            config,
            queues: HashMap::new(),
        }
    }

    /// Register a named queue the config may bind to.
    pub fn queue(mut self, name: impl Into<String>, handle: QueueHandle<M>) -> Self {
        self.queues.insert(name.into(), handle);
        self
    }

    /// Resolve the route table into a ready dispatcher.
    #[instrument(
        name = "dispatcher_build",
        skip(self),
        fields(dispatcher = %self.config.name, routes = self.config.routes.len())
    )]
    pub fn build(self) -> Result<Dispatcher<K, M>, RouterError> {
        if self.config.name.is_empty() {
            return Err(RouterError::EmptyName);
        }

        let mut dispatcher = Dispatcher::new(&self.config.name);

        for binding in &self.config.routes {
            let handle = self
                .queues
                .get(&binding.queue)
                .cloned()
                .ok_or_else(|| RouterError::unknown_queue(&binding.queue, format!("{:?}", binding.kind)))?;
            dispatcher.register_route(binding.kind, Some(handle));
        }

        if let Some(queue_name) = &self.config.default_queue {
            let handle = self
                .queues
                .get(queue_name)
                .cloned()
                .ok_or_else(|| RouterError::unknown_default_queue(queue_name))?;
            dispatcher.register_default(Some(handle));
        }

        debug!(
            dispatcher = %dispatcher.name,
            routes = dispatcher.route_count(),
            default = dispatcher.has_default_route(),
            "dispatcher built"
        );

        Ok(dispatcher)
    }
}
