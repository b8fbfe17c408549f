//! Dijkstra's and A* search on top of a decrease-key heap
//!
//! Both searches keep exactly one heap entry per discovered node and lower it
//! in place with `decrease_key` when a cheaper route turns up, which is the
//! access pattern Fibonacci heaps are built for.
//!
//! # Design
//!
//! Only lightweight `(f_score, index)` pairs are stored in the heap. A fast hash
//! map (using FxHash) maps node states to their index, and a side table holds
//! costs, predecessors and heap handles.
//!
//! Dijkstra is A* with a zero heuristic.
//!
//! # Example
//!
//! ```rust
//! use fibonacci_heap::pathfinding::{dijkstra, SearchNode};
//! use fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct Pos { x: i32, y: i32, goal: (i32, i32) }
//!
//! impl SearchNode for Pos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, u32)> {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .into_iter()
//!             .map(|(dx, dy)| (Pos { x: self.x + dx, y: self.y + dy, goal: self.goal }, 1))
//!             .collect()
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         (self.x, self.y) == self.goal
//!     }
//! }
//!
//! let start = Pos { x: 0, y: 0, goal: (2, 2) };
//! let (path, cost) = dijkstra::<_, FibonacciHeap<_>>(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use crate::traits::DecreaseKeyHeap;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// `Default` must be the zero cost.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate successors and recognize a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must never overestimate the remaining cost for A* to find
/// optimal paths.
pub trait AStarNode: SearchNode {
    /// Estimated cost from this node to the nearest goal
    fn heuristic(&self) -> Self::Cost;
}

/// Index of a discovered node in the search tables
pub type NodeIndex = usize;

/// Heap entry: ordered by f-score, then by index for determinism
pub type Entry<C> = (C, NodeIndex);

struct NodeRecord<N: SearchNode, H> {
    node: N,
    g_score: N::Cost,
    came_from: Option<NodeIndex>,
    handle: Option<H>,
    closed: bool,
}

/// Runs Dijkstra's algorithm from `start` until a node reports `is_goal()`.
///
/// Returns the path (start and goal included) and its cost, or `None` if no
/// goal is reachable.
pub fn dijkstra<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<Entry<N::Cost>>,
{
    search::<N, H>(start, |_| N::Cost::default())
}

/// Runs A* search from `start`, guided by each node's `heuristic()`.
pub fn astar<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: AStarNode,
    H: DecreaseKeyHeap<Entry<N::Cost>>,
{
    search::<N, H>(start, |n| n.heuristic())
}

fn search<N, H>(start: &N, heuristic: impl Fn(&N) -> N::Cost) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<Entry<N::Cost>>,
{
    let mut heap = H::new();
    let mut index: FxHashMap<N, NodeIndex> = FxHashMap::default();
    let mut records: Vec<NodeRecord<N, H::Handle>> = Vec::new();

    let zero = N::Cost::default();
    index.insert(start.clone(), 0);
    records.push(NodeRecord {
        node: start.clone(),
        g_score: zero,
        came_from: None,
        handle: Some(heap.push_with_handle((heuristic(start), 0))),
        closed: false,
    });

    while let Some((_, current)) = heap.pop() {
        let record = &mut records[current];
        record.closed = true;
        record.handle = None;

        if record.node.is_goal() {
            let cost = record.g_score;
            return Some((reconstruct_path(&records, current), cost));
        }

        let current_g = record.g_score;
        for (neighbor, edge_cost) in record.node.successors() {
            let tentative_g = current_g + edge_cost;
            let f_score = tentative_g + heuristic(&neighbor);

            match index.get(&neighbor) {
                None => {
                    let slot = records.len();
                    index.insert(neighbor.clone(), slot);
                    records.push(NodeRecord {
                        node: neighbor,
                        g_score: tentative_g,
                        came_from: Some(current),
                        handle: Some(heap.push_with_handle((f_score, slot))),
                        closed: false,
                    });
                }
                Some(&slot) => {
                    let entry = &mut records[slot];
                    if entry.closed || tentative_g >= entry.g_score {
                        continue;
                    }
                    entry.g_score = tentative_g;
                    entry.came_from = Some(current);
                    if let Some(handle) = &entry.handle {
                        // The heuristic of a node is fixed, so a lower g always lowers f
                        let lowered = heap.decrease_key(handle, (f_score, slot));
                        debug_assert!(lowered.is_ok(), "open entry not lowered: {lowered:?}");
                    }
                }
            }
        }
    }

    None
}

fn reconstruct_path<N: SearchNode, H>(records: &[NodeRecord<N, H>], goal: NodeIndex) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(i) = current {
        path.push(records[i].node.clone());
        current = records[i].came_from;
    }
    path.reverse();
    path
}
