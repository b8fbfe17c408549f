//! Structural self-check for [`FibonacciHeap`]
//!
//! [`FibonacciHeap::validate`] walks the whole forest and reports the first
//! broken invariant it finds. It is O(n) and meant for tests and debugging.

use crate::fibonacci::FibonacciHeap;
use crate::storage::NodeKey;
use thiserror::Error;

/// A broken structural invariant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `min` is set but does not resolve, or is not a root
    #[error("minimum link does not point at a root")]
    MinNotRoot,
    /// Some root orders before the root `min` points at
    #[error("a root orders before the minimum root")]
    MinNotMinimal,
    /// `is_empty()` and `len()` disagree
    #[error("heap has length {len} but empty = {empty}")]
    EmptinessMismatch { len: usize, empty: bool },
    /// A ring's `next`/`prev` links are not mutual, or the ring does not close
    #[error("sibling ring is broken")]
    BrokenRing,
    /// A child does not point back at its parent
    #[error("child's parent link does not match the tree")]
    ParentMismatch,
    /// A child orders before its parent
    #[error("child orders before its parent")]
    HeapOrder,
    /// A node's degree differs from the length of its child ring
    #[error("degree {degree} does not match {children} children")]
    DegreeMismatch { degree: usize, children: usize },
    /// A root carries a mark
    #[error("root is marked")]
    MarkedRoot,
    /// A node still holds the removed sentinel
    #[error("removed sentinel found in heap")]
    SentinelInHeap,
    /// `len()` differs from the number of reachable nodes, or nodes are unreachable
    #[error("length {len} but {reachable} reachable of {allocated} allocated nodes")]
    LengthMismatch {
        len: usize,
        reachable: usize,
        allocated: usize,
    },
}

impl<T: Ord> FibonacciHeap<T> {
    /// Checks every structural invariant of the heap
    ///
    /// - the root list is a ring and `min` is a root with minimal value
    /// - every child orders no lower than its parent
    /// - every degree equals the length of the child ring
    /// - no root is marked
    /// - `len()` equals the number of nodes reachable from the roots
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(min) = self.min else {
            if self.len != 0 || self.nodes.len() != 0 {
                return Err(InvariantViolation::LengthMismatch {
                    len: self.len,
                    reachable: 0,
                    allocated: self.nodes.len(),
                });
            }
            return Ok(());
        };
        if self.len == 0 {
            return Err(InvariantViolation::EmptinessMismatch {
                len: 0,
                empty: false,
            });
        }

        let root = self.nodes.get(min).ok_or(InvariantViolation::MinNotRoot)?;
        if root.parent.is_some() {
            return Err(InvariantViolation::MinNotRoot);
        }

        let roots = self.checked_ring(min)?;
        let mut reachable = 0;
        let mut stack: Vec<NodeKey> = Vec::new();
        for &key in &roots {
            let node = &self.nodes[key];
            if node.parent.is_some() {
                return Err(InvariantViolation::ParentMismatch);
            }
            if node.mark {
                return Err(InvariantViolation::MarkedRoot);
            }
            if self.nodes.precedes(key, min) {
                return Err(InvariantViolation::MinNotMinimal);
            }
            stack.push(key);
        }

        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            if node.value.is_none() {
                return Err(InvariantViolation::SentinelInHeap);
            }
            reachable += 1;

            let children = match node.child {
                Some(child) => self.checked_ring(child)?,
                None => Vec::new(),
            };
            if children.len() != node.degree {
                return Err(InvariantViolation::DegreeMismatch {
                    degree: node.degree,
                    children: children.len(),
                });
            }
            for child in children {
                if self.nodes[child].parent != Some(key) {
                    return Err(InvariantViolation::ParentMismatch);
                }
                if self.nodes.precedes(child, key) {
                    return Err(InvariantViolation::HeapOrder);
                }
                stack.push(child);
            }
        }

        if reachable != self.len || self.nodes.len() != self.len {
            return Err(InvariantViolation::LengthMismatch {
                len: self.len,
                reachable,
                allocated: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Collects a ring, verifying link symmetry and that it closes within
    /// the number of allocated nodes
    fn checked_ring(&self, start: NodeKey) -> Result<Vec<NodeKey>, InvariantViolation> {
        let limit = self.nodes.len();
        let mut members = Vec::new();
        let mut current = start;
        loop {
            let node = self
                .nodes
                .get(current)
                .ok_or(InvariantViolation::BrokenRing)?;
            let next = self
                .nodes
                .get(node.next)
                .ok_or(InvariantViolation::BrokenRing)?;
            if next.prev != current {
                return Err(InvariantViolation::BrokenRing);
            }
            members.push(current);
            if members.len() > limit {
                return Err(InvariantViolation::BrokenRing);
            }
            current = node.next;
            if current == start {
                return Ok(members);
            }
        }
    }
}
