//! Fibonacci heap priority queue for Rust
//!
//! This crate provides a Fibonacci heap: a mergeable min-priority queue whose
//! elements can be addressed through handles, with efficient `decrease_key`
//! for algorithms like Dijkstra's shortest path and Prim's spanning tree.
//!
//! # Complexity
//!
//! | operation      | cost               |
//! |----------------|--------------------|
//! | `insert`       | O(1)               |
//! | `find_min`     | O(1)               |
//! | `extract_min`  | O(log n) amortized |
//! | `decrease`     | O(1) amortized     |
//! | `remove`       | O(log n) amortized |
//!
//! A single operation can be expensive; the bounds hold over any sequence.
//!
//! # Example
//!
//! ```rust
//! use fibonacci_heap::fibonacci::FibonacciHeap;
//! use fibonacci_heap::HeapError;
//!
//! let mut heap = FibonacciHeap::new();
//! let a = heap.insert(5);
//! let b = heap.insert(3);
//! heap.decrease(&a, 1).unwrap();
//! assert_eq!(heap.find_min(), Ok(&1));
//!
//! assert_eq!(heap.remove(&b), Ok(3));
//! assert_eq!(heap.remove(&b), Err(HeapError::InvalidHandle));
//!
//! let rest: Vec<_> = heap.drain().collect();
//! assert_eq!(rest, vec![1]);
//! ```
//!
//! # Threading
//!
//! The heap has no internal synchronization. Share it across threads only
//! behind an exclusive lock held for every operation, handle-based ones included.

mod tracing_helpers;

pub mod fibonacci;
pub mod invariants;
pub mod iter;
pub mod pathfinding;
mod ring;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use fibonacci::{FibonacciHandle, FibonacciHeap};
pub use invariants::InvariantViolation;
pub use traits::{DecreaseKeyHeap, ErrorKind, Handle, Heap, HeapError};
