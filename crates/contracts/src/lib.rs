//! # Contracts
//!
//! Frozen interface contracts between the routing crates: the key and queue
//! abstractions the dispatcher consumes, plus the declarative route-table
//! configuration. Business crates depend on this crate only; reverse
//! dependencies are prohibited.

mod error;
mod message_kind;
mod queue;
mod route_config;

pub use error::EnqueueError;
pub use message_kind::MessageKind;
pub use queue::{MessageQueue, QueueHandle};
pub use route_config::{RouteBinding, RouterConfig};
