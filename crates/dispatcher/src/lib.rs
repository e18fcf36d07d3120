//! # Dispatcher
//!
//! Type-keyed message routing.
//!
//! Splits an incoming message stream across per-kind processing queues:
//! - explicit kind -> queue bindings, last write wins
//! - one optional default queue for kinds with no binding
//! - unroutable messages dropped with a warning, never an error
//!
//! The dispatcher never owns the queues it routes to; see
//! [`contracts::QueueHandle`] for the ownership contract.

pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod queues;

pub use contracts::{
    EnqueueError, MessageKind, MessageQueue, QueueHandle, RouteBinding, RouterConfig,
};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::RouterError;
pub use metrics::{MetricsSnapshot, RouterMetrics};
pub use queues::{BoundedQueue, UnboundedQueue};
