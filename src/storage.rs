//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] owned by the heap. Every structural link
//! (parent, child, sibling ring) is a [`NodeKey`] rather than a pointer, so the
//! cyclic sibling rings and upward parent references carry no ownership.
//!
//! # Keys and handles
//!
//! Slotmap keys are generational: once a node is removed, its key stops
//! resolving even if the slot is later reused. Caller handles wrap a key, which
//! is what lets a handle detect that its element has left the heap.

use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Generational key addressing a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// A node of the Fibonacci heap forest
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The stored element; `None` is the "removed" sentinel, which compares
    /// lower than every element
    pub(crate) value: Option<T>,
    /// Number of direct children
    pub(crate) degree: usize,
    /// Lost a child since it last became a child of its current parent
    pub(crate) mark: bool,
    /// Parent node (`None` for roots)
    pub(crate) parent: Option<NodeKey>,
    /// Any one member of the child ring
    pub(crate) child: Option<NodeKey>,
    /// Sibling ring links; a singleton points at itself
    pub(crate) prev: NodeKey,
    pub(crate) next: NodeKey,
}

/// Slotmap-backed node arena
///
/// Indexing with a key that does not resolve panics; keys stored in live links
/// always resolve, and caller-supplied keys go through [`NodeArena::get`].
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<T> NodeArena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocates a node holding `value` as a singleton ring
    pub(crate) fn insert(&mut self, value: T) -> NodeKey {
        self.nodes.insert_with_key(|key| Node {
            value: Some(value),
            degree: 0,
            mark: false,
            parent: None,
            child: None,
            prev: key,
            next: key,
        })
    }

    /// Frees a node. The caller must already have unlinked it.
    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<Node<T>> {
        self.nodes.remove(key)
    }

    pub(crate) fn get(&self, key: NodeKey) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node<T>> {
        self.nodes.get_mut(key)
    }

    pub(crate) fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates live values with their keys, in arena order
    pub(crate) fn values(&self) -> impl Iterator<Item = (NodeKey, &T)> {
        self.nodes
            .iter()
            .filter_map(|(key, node)| node.value.as_ref().map(|value| (key, value)))
    }
}

impl<T: Ord> NodeArena<T> {
    /// Returns true if `a` orders strictly before `b`
    ///
    /// The removed sentinel precedes every element and ties with another sentinel.
    pub(crate) fn precedes(&self, a: NodeKey, b: NodeKey) -> bool {
        match (&self[a].value, &self[b].value) {
            (None, None) => false,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (Some(x), Some(y)) => x < y,
        }
    }
}

impl<T> Index<NodeKey> for NodeArena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, key: NodeKey) -> &Node<T> {
        &self.nodes[key]
    }
}

impl<T> IndexMut<NodeKey> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut Node<T> {
        &mut self.nodes[key]
    }
}
