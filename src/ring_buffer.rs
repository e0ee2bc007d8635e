use crate::error::CapacityError;

/// A bounded FIFO queue over a fixed ring of slots.
///
/// Two cursors wrap modulo the capacity: `read` marks the next slot to
/// dequeue from, `write` the next slot to fill. Occupancy is tracked with an
/// explicit count, so full and empty stay unambiguous no matter what the
/// payload type looks like. The backing storage is allocated once at
/// construction and never grows.
///
/// Overflow and underflow are ordinary return values, not panics:
/// [`enqueue`](CircularQueue::enqueue) hands the item back when the queue is
/// full, and [`dequeue`](CircularQueue::dequeue) returns `None` when it is
/// empty.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a queue with exactly `capacity` slots, all empty.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError {
                requested: capacity,
            });
        }

        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            slots.push(None);
        }

        Ok(CircularQueue {
            slots,
            read: 0,
            write: 0,
            len: 0,
        })
    }

    /// Adds `item` at the write cursor and advances it, wrapping at the end
    /// of the ring.
    ///
    /// # Errors
    ///
    /// When the queue is full the item is handed back as `Err(item)` and
    /// nothing is mutated; the caller keeps ownership and may retry after a
    /// dequeue.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.len == self.slots.len() {
            return Err(item);
        }

        self.slots[self.write] = Some(item);
        self.write = (self.write + 1) % self.slots.len();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest item, or `None` when the queue is
    /// empty.
    ///
    /// The vacated slot is reset and the read cursor advances; the write
    /// cursor is never touched. A failed dequeue mutates nothing.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.slots[self.read].take();
        self.read = (self.read + 1) % self.slots.len();
        self.len -= 1;
        item
    }

    /// Borrows the oldest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The fixed slot count chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every stored item and resets the queue to its freshly
    /// constructed state.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Iterates stored items from oldest to newest without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.read + i) % self.slots.len()].as_ref())
    }
}
