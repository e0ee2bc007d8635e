//! Fixed-capacity circular queue.
//!
//! A bounded FIFO queue backed by a ring of slots that never resizes.
//! Enqueue and dequeue are O(1); a full queue rejects new items instead of
//! overwriting unread ones, and an empty queue reports underflow as a plain
//! return value. Both are expected, recoverable conditions, not errors.
//!
//! ```
//! use circular_queue::CircularQueue;
//!
//! let mut queue = CircularQueue::new(3).unwrap();
//! queue.enqueue("A").unwrap();
//! queue.enqueue("B").unwrap();
//! assert_eq!(queue.dequeue(), Some("A"));
//! assert_eq!(queue.dequeue(), Some("B"));
//! assert_eq!(queue.dequeue(), None);
//! ```
//!
//! Single-threaded by design: no operation blocks, and callers embedding a
//! queue in concurrent code must serialize access externally.

mod error;
mod ring_buffer;

pub use error::CapacityError;
pub use ring_buffer::CircularQueue;
