use thiserror::Error;

/// Returned by [`crate::CircularQueue::new`] when the requested capacity is
/// zero.
///
/// A zero-slot queue is degenerate: it could never hold an item, and full
/// and empty would be the same state. Construction is the one place where
/// failure is a real error rather than an expected condition, so it gets a
/// descriptive error type instead of a sentinel return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("queue capacity must be at least 1, got {requested}")]
pub struct CapacityError {
    /// The capacity the caller asked for.
    pub requested: usize,
}
