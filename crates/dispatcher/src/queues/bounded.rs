//! BoundedQueue - non-blocking handle over a bounded tokio channel

use std::sync::Arc;

use tokio::sync::mpsc;

use contracts::{EnqueueError, MessageQueue, QueueHandle};

/// Producer handle over a bounded `tokio::sync::mpsc` channel.
///
/// A full channel rejects the message instead of blocking the dispatcher;
/// backpressure, if wanted, belongs to the consumer side.
pub struct BoundedQueue<M> {
    name: String,
    tx: mpsc::Sender<M>,
}

impl<M: Send + 'static> BoundedQueue<M> {
    /// Wrap an existing sender under the given queue name.
    pub fn new(name: impl Into<String>, tx: mpsc::Sender<M>) -> Self {
        Self {
            name: name.into(),
            tx,
        }
    }

    /// Create a channel of `capacity` and return the handle plus the
    /// receiver, which the caller owns.
    pub fn channel(name: impl Into<String>, capacity: usize) -> (QueueHandle<M>, mpsc::Receiver<M>) {
        let (tx, rx) = mpsc::channel(capacity);
        let handle: QueueHandle<M> = Arc::new(Self::new(name, tx));
        (handle, rx)
    }
}

impl<M: Send> MessageQueue<M> for BoundedQueue<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enqueue(&self, message: M) -> Result<(), EnqueueError> {
        self.tx.try_send(message).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => EnqueueError::full(&self.name),
            mpsc::error::TrySendError::Closed(_) => EnqueueError::closed(&self.name),
        })
    }
}
