//! MessageQueue trait - dispatcher output interface
//!
//! Defines the enqueue capability the dispatcher consumes. The queues
//! themselves are created, drained and destroyed by the embedding
//! application.

use std::sync::Arc;

use crate::EnqueueError;

/// Producer-side capability over an externally owned queue.
///
/// Implementations wrap only the producer half; the consumer half stays with
/// the caller. Enqueue must not block the caller — a queue that cannot
/// accept the message right now rejects it instead.
pub trait MessageQueue<M>: Send + Sync {
    /// Queue name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Hand one message to the queue.
    ///
    /// # Errors
    /// [`EnqueueError::Full`] when the queue is at capacity,
    /// [`EnqueueError::Closed`] when the consumer side is gone. The message
    /// is dropped in both cases.
    fn enqueue(&self, message: M) -> Result<(), EnqueueError>;
}

/// Shared, non-owning handle to a message queue.
///
/// Holding or dropping a `QueueHandle` never drains, closes or frees the
/// underlying queue. The embedding application keeps full ownership of the
/// consumer side and must keep the queue alive for as long as a dispatcher
/// may still route to it (unbind the route first, or tear the dispatcher
/// down first).
pub type QueueHandle<M> = Arc<dyn MessageQueue<M>>;
