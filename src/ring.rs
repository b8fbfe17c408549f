//! Circular doubly-linked sibling rings over the node arena
//!
//! Both the root list and every child list are rings:
//! - A single node links to itself (both `prev` and `next`)
//! - There is no head; any member can serve as the entry point
//! - Splicing two rings together is O(1)
//!
//! All operations relink keys only; nothing is allocated or freed here.

use crate::storage::{NodeArena, NodeKey};

impl<T> NodeArena<T> {
    /// Splices the ring containing `b` into the ring containing `a`, right after `a`
    ///
    /// `a` and `b` must belong to different rings. The resulting order of
    /// members is unspecified beyond being a single ring.
    pub(crate) fn join(&mut self, a: NodeKey, b: NodeKey) {
        let a_next = self[a].next;
        let b_prev = self[b].prev;

        self[a_next].prev = b_prev;
        self[b_prev].next = a_next;
        self[a].next = b;
        self[b].prev = a;
    }

    /// Detaches `key` from its ring, leaving it as a singleton
    ///
    /// Returns a remaining member of the old ring, or `None` if `key` was alone.
    pub(crate) fn remove_sibling(&mut self, key: NodeKey) -> Option<NodeKey> {
        let prev = self[key].prev;
        if prev == key {
            return None;
        }
        let next = self[key].next;

        self[prev].next = next;
        self[next].prev = prev;
        self[key].prev = key;
        self[key].next = key;

        Some(prev)
    }

    /// Clears the parent link of every member of the ring containing `start`
    ///
    /// Used when a ring of children is promoted to roots; roots are never
    /// marked, so marks are cleared along the way.
    pub(crate) fn clear_parents(&mut self, start: NodeKey) {
        let mut current = start;
        loop {
            let node = &mut self[current];
            node.parent = None;
            node.mark = false;
            current = node.next;
            if current == start {
                break;
            }
        }
    }

    /// Makes the root `child` a child of `parent`
    ///
    /// `child` must be a singleton ring. It starts out unmarked under its new parent.
    pub(crate) fn add_child(&mut self, parent: NodeKey, child: NodeKey) {
        match self[parent].child {
            Some(existing) => self.join(existing, child),
            None => self[parent].child = Some(child),
        }

        let node = &mut self[child];
        node.parent = Some(parent);
        node.mark = false;

        self[parent].degree += 1;
    }

    /// Iterates once around the ring containing `start`, beginning at `start`
    pub(crate) fn ring(&self, start: NodeKey) -> Ring<'_, T> {
        Ring {
            arena: self,
            start,
            next: Some(start),
        }
    }
}

/// Iterator over the members of one ring
pub(crate) struct Ring<'a, T> {
    arena: &'a NodeArena<T>,
    start: NodeKey,
    next: Option<NodeKey>,
}

impl<T> Iterator for Ring<'_, T> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        let following = self.arena[current].next;
        self.next = (following != self.start).then_some(following);
        Some(current)
    }
}
