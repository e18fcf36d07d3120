//! Queue-level error definitions

use thiserror::Error;

/// Error returned by [`crate::MessageQueue::enqueue`].
///
/// Both variants mean the message was dropped; neither blocks the caller.
#[derive(Debug, Error)]
pub enum EnqueueError {
    /// Queue at capacity
    #[error("queue '{queue}' is full, message dropped")]
    Full { queue: String },

    /// Consumer side is gone
    #[error("queue '{queue}' is closed")]
    Closed { queue: String },
}

impl EnqueueError {
    /// Create a queue-full error
    pub fn full(queue: impl Into<String>) -> Self {
        Self::Full {
            queue: queue.into(),
        }
    }

    /// Create a queue-closed error
    pub fn closed(queue: impl Into<String>) -> Self {
        Self::Closed {
            queue: queue.into(),
        }
    }
}
