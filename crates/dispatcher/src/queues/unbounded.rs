//! UnboundedQueue - handle over an unbounded tokio channel

use std::sync::Arc;

use tokio::sync::mpsc;

use contracts::{EnqueueError, MessageQueue, QueueHandle};

/// Producer handle over an unbounded `tokio::sync::mpsc` channel.
///
/// Enqueue only fails once the receiver is gone; memory is the sole bound.
pub struct UnboundedQueue<M> {
    name: String,
    tx: mpsc::UnboundedSender<M>,
}

impl<M: Send + 'static> UnboundedQueue<M> {
    /// Wrap an existing sender under the given queue name.
    pub fn new(name: impl Into<String>, tx: mpsc::UnboundedSender<M>) -> Self {
        Self {
            name: name.into(),
            tx,
        }
    }

    /// Create a channel and return the handle plus the receiver, which the
    /// caller owns.
    pub fn channel(name: impl Into<String>) -> (QueueHandle<M>, mpsc::UnboundedReceiver<M>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle: QueueHandle<M> = Arc::new(Self::new(name, tx));
        (handle, rx)
    }
}

impl<M: Send> MessageQueue<M> for UnboundedQueue<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enqueue(&self, message: M) -> Result<(), EnqueueError> {
        self.tx
            .send(message)
            .map_err(|_| EnqueueError::closed(&self.name))
    }
}
