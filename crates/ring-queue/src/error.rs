use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `front` on an empty queue.
    #[error("queue is empty")]
    Empty,
    #[error("queue capacity must be positive")]
    ZeroCapacity,
    #[error("couldn't allocate queue: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
