//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) insert and find_min
//! - O(1) amortized decrease_key
//! - O(log n) amortized extract_min and remove
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list and the heap keeps a link to the minimum root.
//! Work is deferred: insertion just adds a root, and only extraction tidies up by
//! consolidating roots of equal degree.
//!
//! Nodes live in a generational arena owned by the heap. A [`FibonacciHandle`]
//! is a copyable token for one node; once that node leaves the heap the handle
//! is orphaned and every mutating operation on it fails with
//! [`HeapError::InvalidHandle`].

use crate::storage::{NodeArena, NodeKey};
use crate::tracing_helpers::{debug_log, trace_log};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Natural logarithm of the golden ratio
const LN_PHI: f64 = 0.481_211_825_059_603_4;

/// Upper bound on the degree of any node in a heap of `len` nodes
///
/// A node of degree k roots a subtree of at least F(k+2) >= phi^k nodes.
fn max_degree(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    ((len as f64).ln() / LN_PHI) as usize
}

/// Handle to an element in a Fibonacci heap
///
/// Handles are tied to the heap that issued them. Using a handle with a
/// different heap is not memory-unsafe, but addresses an unrelated element
/// or none at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FibonacciHandle {
    key: NodeKey,
}

impl Handle for FibonacciHandle {}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let five = heap.insert(5);
/// heap.insert(3);
///
/// heap.decrease(&five, 1).unwrap();
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert!(heap.is_orphan(&five));
/// ```
#[derive(Clone)]
pub struct FibonacciHeap<T: Ord> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) min: Option<NodeKey>,
    pub(crate) len: usize,
}

impl<T: Ord> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FibonacciHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` elements before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            min: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Drops every element. All outstanding handles become orphans.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
        self.len = 0;
    }

    /// Inserts a value, returning a handle to it
    ///
    /// The value becomes a new root; no consolidation happens here.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, value: T) -> FibonacciHandle {
        let key = self.nodes.insert(value);

        match self.min {
            Some(min) => {
                self.nodes.join(min, key);
                if self.nodes.precedes(key, min) {
                    self.min = Some(key);
                }
            }
            None => self.min = Some(key),
        }

        self.len += 1;
        FibonacciHandle { key }
    }

    /// Returns the minimum value
    ///
    /// # Errors
    /// `HeapError::Empty` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.min
            .and_then(|min| self.nodes[min].value.as_ref())
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum value
    ///
    /// The handle of the extracted element becomes an orphan.
    ///
    /// # Errors
    /// `HeapError::Empty` if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.evict_min().flatten().ok_or(HeapError::Empty)
    }

    /// Returns the value behind `handle`, or `None` once it has left the heap
    pub fn get(&self, handle: &FibonacciHandle) -> Option<&T> {
        self.nodes
            .get(handle.key)
            .and_then(|node| node.value.as_ref())
    }

    /// Returns true once the element behind `handle` has been extracted or removed
    pub fn is_orphan(&self, handle: &FibonacciHandle) -> bool {
        !self.nodes.contains(handle.key)
    }

    /// Returns true while the element behind `handle` is still in the heap
    pub fn contains(&self, handle: &FibonacciHandle) -> bool {
        self.nodes.contains(handle.key)
    }

    /// Lowers the value behind `handle` to `new_value`
    ///
    /// An equal value is accepted and leaves the structure unchanged.
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element has left the heap
    /// - `HeapError::ValueIncreased` if `new_value` is greater than the current value
    ///
    /// Both are checked before anything is modified.
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn decrease(&mut self, handle: &FibonacciHandle, new_value: T) -> Result<(), HeapError> {
        let key = handle.key;
        let node = self.nodes.get_mut(key).ok_or(HeapError::InvalidHandle)?;
        if node.value.as_ref().is_some_and(|current| new_value > *current) {
            return Err(HeapError::ValueIncreased);
        }
        node.value = Some(new_value);

        if let Some(parent) = node.parent {
            if self.nodes.precedes(key, parent) {
                self.cut(key);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if self.nodes.precedes(key, min) {
                self.min = Some(key);
            }
        }
        Ok(())
    }

    /// Removes the element behind `handle` and returns its value
    ///
    /// Equivalent to decreasing the element below every other value and then
    /// extracting the minimum.
    ///
    /// # Errors
    /// `HeapError::InvalidHandle` if the element has already left the heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn remove(&mut self, handle: &FibonacciHandle) -> Result<T, HeapError> {
        let key = handle.key;
        let node = self.nodes.get_mut(key).ok_or(HeapError::InvalidHandle)?;
        let value = node.value.take();
        let parent = node.parent;
        trace_log!(?key, has_parent = parent.is_some(), "removing node");

        if let Some(parent) = parent {
            self.cut(key);
            self.cascading_cut(parent);
        }

        self.min = Some(key);
        self.evict_min();
        value.ok_or(HeapError::InvalidHandle)
    }

    /// Returns a draining iterator yielding every value in non-decreasing order
    ///
    /// Values are extracted lazily; dropping the iterator early leaves the
    /// remaining values in the heap.
    pub fn drain(&mut self) -> crate::iter::Drain<'_, T> {
        crate::iter::Drain::new(self)
    }

    /// Returns the degree of every root, in root ring order
    ///
    /// After an extraction no two roots share a degree.
    pub fn root_degrees(&self) -> Vec<usize> {
        match self.min {
            Some(min) => self
                .nodes
                .ring(min)
                .map(|key| self.nodes[key].degree)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Unlinks the minimum root, promotes its children and consolidates
    ///
    /// Returns `None` if the heap is empty, otherwise the evicted node's value
    /// (`None` for the removed sentinel).
    fn evict_min(&mut self) -> Option<Option<T>> {
        let min = self.min?;

        self.min = self.nodes.remove_sibling(min);

        if let Some(child) = self.nodes[min].child.take() {
            self.nodes.clear_parents(child);
            match self.min {
                Some(root) => self.nodes.join(root, child),
                None => self.min = Some(child),
            }
        }

        self.len -= 1;
        if self.min.is_some() {
            self.consolidate();
        }

        self.nodes.remove(min).map(|node| node.value)
    }

    /// Links roots of equal degree until every root has a distinct degree,
    /// then rebuilds the root ring and picks the new minimum
    fn consolidate(&mut self) {
        let bound = max_degree(self.len);
        let mut by_degree: SmallVec<[Option<NodeKey>; 64]> = smallvec![None; bound + 1];
        debug_log!(len = self.len, max_degree = bound, "consolidating");

        while let Some(root) = self.min {
            self.min = self.nodes.remove_sibling(root);

            let mut tree = root;
            loop {
                let degree = self.nodes[tree].degree;
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }

                match by_degree[degree].take() {
                    None => {
                        by_degree[degree] = Some(tree);
                        break;
                    }
                    Some(existing) => {
                        // Ties go to the tree being placed
                        let (winner, loser) = if self.nodes.precedes(existing, tree) {
                            (existing, tree)
                        } else {
                            (tree, existing)
                        };
                        trace_log!(?winner, ?loser, degree, "linking roots");
                        self.nodes.add_child(winner, loser);
                        tree = winner;
                    }
                }
            }
        }

        for root in by_degree.into_iter().flatten() {
            match self.min {
                Some(min) => {
                    self.nodes.join(min, root);
                    if self.nodes.precedes(root, min) {
                        self.min = Some(root);
                    }
                }
                None => self.min = Some(root),
            }
        }
        debug_log!(roots = self.root_degrees().len(), "consolidated");
    }

    /// Detaches `key` from its parent and makes it an unmarked root
    fn cut(&mut self, key: NodeKey) {
        let Some(parent) = self.nodes[key].parent else {
            return;
        };
        trace_log!(?key, ?parent, "cut");

        let remaining = self.nodes.remove_sibling(key);
        let parent_node = &mut self.nodes[parent];
        parent_node.degree -= 1;
        if parent_node.child == Some(key) {
            parent_node.child = remaining;
        }

        let node = &mut self.nodes[key];
        node.parent = None;
        node.mark = false;

        match self.min {
            Some(min) => self.nodes.join(min, key),
            None => self.min = Some(key),
        }
    }

    /// Walks upward from `start`: marks the first unmarked non-root and stops,
    /// cutting every marked ancestor on the way
    fn cascading_cut(&mut self, start: NodeKey) {
        let mut current = start;
        while let Some(parent) = self.nodes[current].parent {
            if !self.nodes[current].mark {
                self.nodes[current].mark = true;
                return;
            }
            trace_log!(key = ?current, "cascading cut");
            self.cut(current);
            current = parent;
        }
    }
}

impl<T: Ord> Heap<T> for FibonacciHeap<T> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, value: T) {
        self.insert(value);
    }

    fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }
}

impl<T: Ord> DecreaseKeyHeap<T> for FibonacciHeap<T> {
    type Handle = FibonacciHandle;

    fn push_with_handle(&mut self, value: T) -> FibonacciHandle {
        self.insert(value)
    }

    fn decrease_key(&mut self, handle: &FibonacciHandle, new_value: T) -> Result<(), HeapError> {
        self.decrease(handle, new_value)
    }

    fn remove(&mut self, handle: &FibonacciHandle) -> Result<T, HeapError> {
        FibonacciHeap::remove(self, handle)
    }

    fn get(&self, handle: &FibonacciHandle) -> Option<&T> {
        FibonacciHeap::get(self, handle)
    }

    fn is_orphan(&self, handle: &FibonacciHandle) -> bool {
        FibonacciHeap::is_orphan(self, handle)
    }
}

impl<T: Ord> Extend<T> for FibonacciHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for FibonacciHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for FibonacciHeap<T> {
    /// Lists the minimum first, then the rest in arena order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        list.entries(self.find_min().ok());
        list.entries(
            self.nodes
                .values()
                .filter(|&(key, _)| Some(key) != self.min)
                .map(|(_, value)| value),
        );
        list.finish()
    }
}
