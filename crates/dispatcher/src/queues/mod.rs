//! Queue-handle adapters over tokio mpsc channels
//!
//! Each adapter wraps only the sender half; the receiver stays with the
//! caller, which keeps the dispatcher's non-ownership contract literal.

mod bounded;
mod unbounded;

pub use bounded::BoundedQueue;
pub use unbounded::UnboundedQueue;
