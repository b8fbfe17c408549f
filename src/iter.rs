//! Sorted, consuming iteration over a [`FibonacciHeap`]
//!
//! Both iterators are thin adapters over `extract_min`: each call to `next`
//! extracts the current minimum, so values arrive in non-decreasing order and
//! consumed values are gone from the heap. Neither can be restarted.

use crate::fibonacci::FibonacciHeap;
use std::iter::FusedIterator;

/// Borrowing iterator returned by [`FibonacciHeap::drain`]
///
/// Values not yet yielded stay in the heap if the iterator is dropped early.
#[derive(Debug)]
pub struct Drain<'a, T: Ord> {
    heap: &'a mut FibonacciHeap<T>,
}

impl<'a, T: Ord> Drain<'a, T> {
    pub(crate) fn new(heap: &'a mut FibonacciHeap<T>) -> Self {
        Drain { heap }
    }
}

impl<T: Ord> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for Drain<'_, T> {}

impl<T: Ord> FusedIterator for Drain<'_, T> {}

/// Owning iterator over the values of a heap in non-decreasing order
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let heap: FibonacciHeap<i32> = vec![5, 3, 8, 1].into_iter().collect();
/// let sorted: Vec<i32> = heap.into_iter().collect();
/// assert_eq!(sorted, vec![1, 3, 5, 8]);
/// ```
#[derive(Debug)]
pub struct IntoIter<T: Ord> {
    heap: FibonacciHeap<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> IntoIterator for FibonacciHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { heap: self }
    }
}

impl<'a, T: Ord> IntoIterator for &'a mut FibonacciHeap<T> {
    type Item = T;
    type IntoIter = Drain<'a, T>;

    fn into_iter(self) -> Drain<'a, T> {
        self.drain()
    }
}
