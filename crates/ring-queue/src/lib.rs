//! Growable circular-buffer FIFO queue.
//!
//! Items live in a fixed array addressed modulo its capacity from a front
//! index, so dequeues never shift elements. When an enqueue finds the array
//! full the capacity doubles and the wrapped tail is moved so the logical
//! sequence becomes contiguous again; enqueue and dequeue are amortized O(1).
//!
//! # Example
//!
//! ```
//! use ring_queue::RingQueue;
//!
//! let mut q = RingQueue::new().unwrap();
//! for i in 0..5 {
//!     q.enqueue(i).unwrap();
//! }
//! assert_eq!(q.dequeue(), Ok(0));
//! assert_eq!(q.front(), Ok(&1));
//! assert_eq!(q.to_string(), "1 2 3 4");
//! ```

pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::{Iter, RingQueue, DEFAULT_CAPACITY};
