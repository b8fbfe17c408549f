//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait with the `BinaryHeap`-like push/peek/pop surface
//! - [`DecreaseKeyHeap`]: Extended trait adding handles, `decrease_key` and `remove`
//!
//! Unlike `std::collections::BinaryHeap`, these heaps are min-heaps: the value
//! that compares lowest under `Ord` is the one returned by `peek` and `pop`.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The proposed value compares greater than the element's current value
    #[error("new value must not be greater than the current value")]
    ValueIncreased,
    /// The handle is no longer valid (element was extracted or removed)
    #[error("handle does not belong to the heap (element was removed)")]
    InvalidHandle,
    /// The heap holds no elements
    #[error("heap is empty")]
    Empty,
}

/// Broad classification of a [`HeapError`]
///
/// Every failure is a precondition violation on the caller's side; none of them
/// leaves the heap modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was rejected (e.g. a "decrease" that would increase the value)
    InvalidArgument,
    /// The operation was applied to a handle whose element has left the heap
    InvalidState,
    /// The operation needs at least one element
    EmptyCollection,
}

impl HeapError {
    /// Returns the kind of precondition this error reports
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeapError::ValueIncreased => ErrorKind::InvalidArgument,
            HeapError::InvalidHandle => ErrorKind::InvalidState,
            HeapError::Empty => ErrorKind::EmptyCollection,
        }
    }
}

/// A handle to an element in the heap, used for decrease_key and remove
///
/// This is an opaque token identifying a specific element. Handles do not own
/// the element; the heap does.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::Heap;
/// use fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(1) for the Fibonacci heap.
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n) amortized for the Fibonacci heap.
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait with `decrease_key` support
///
/// `push_with_handle` returns a handle that later addresses the same element
/// for `decrease_key` and `remove`. These operations are what algorithms like
/// Dijkstra's shortest path need to update entries already in the queue.
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::{DecreaseKeyHeap, Heap};
/// use fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<u32> = Heap::new();
/// let handle = heap.push_with_handle(10);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// ```
pub trait DecreaseKeyHeap<T: Ord>: Heap<T> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    fn push_with_handle(&mut self, value: T) -> Self::Handle;

    /// Replaces the element's value with a value that is not greater
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element has already left the heap
    /// - `HeapError::ValueIncreased` if `new_value` compares greater than the current value
    ///
    /// # Time Complexity
    /// O(1) amortized for the Fibonacci heap.
    fn decrease_key(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;

    /// Removes the element from the heap and returns its value
    ///
    /// # Errors
    /// `HeapError::InvalidHandle` if the element has already left the heap.
    fn remove(&mut self, handle: &Self::Handle) -> Result<T, HeapError>;

    /// Returns the element's current value, or `None` once it has left the heap
    fn get(&self, handle: &Self::Handle) -> Option<&T>;

    /// Returns true once the element has been extracted or removed
    fn is_orphan(&self, handle: &Self::Handle) -> bool {
        self.get(handle).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(HeapError::ValueIncreased.kind(), ErrorKind::InvalidArgument);
        assert_eq!(HeapError::InvalidHandle.kind(), ErrorKind::InvalidState);
        assert_eq!(HeapError::Empty.kind(), ErrorKind::EmptyCollection);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert!(HeapError::InvalidHandle.to_string().contains("removed"));
    }
}
