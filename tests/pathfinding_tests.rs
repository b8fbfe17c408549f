//! Tests for the pathfinding helpers
//!
//! Tests cover:
//! - Dijkstra and A* agreeing on optimal costs
//! - Graphs where a node's queue entry must be lowered with decrease_key
//! - Unreachable goals

use fibonacci_heap::fibonacci::FibonacciHeap;
use fibonacci_heap::pathfinding::{astar, dijkstra, AStarNode, SearchNode};

// ============================================================================
// Test Node Types
// ============================================================================

/// Grid cell with walls; carries the goal so it can answer is_goal()
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct Cell {
    x: i32,
    y: i32,
    goal: (i32, i32),
}

const WIDTH: i32 = 20;
const HEIGHT: i32 = 20;

fn is_wall(x: i32, y: i32) -> bool {
    // A vertical wall with a single gap at the bottom
    x == 10 && y < HEIGHT - 1
}

impl SearchNode for Cell {
    type Cost = u32;

    fn successors(&self) -> Vec<(Self, u32)> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .filter(|&(x, y)| (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) && !is_wall(x, y))
            .map(|(x, y)| {
                (
                    Cell {
                        x,
                        y,
                        goal: self.goal,
                    },
                    1,
                )
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        (self.x, self.y) == self.goal
    }
}

impl AStarNode for Cell {
    fn heuristic(&self) -> u32 {
        ((self.x - self.goal.0).abs() + (self.y - self.goal.1).abs()) as u32
    }
}

/// Complete graph where the direct edge is always the most expensive route,
/// so tentative costs get lowered repeatedly
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct Dense {
    id: u32,
    n: u32,
}

impl SearchNode for Dense {
    type Cost = u64;

    fn successors(&self) -> Vec<(Self, u64)> {
        (0..self.n)
            .filter(|&j| j != self.id)
            .map(|j| {
                let gap = (j as i64 - self.id as i64).unsigned_abs();
                (Dense { id: j, n: self.n }, gap * gap)
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.id == self.n - 1
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_grid_dijkstra_goes_around_wall() {
    let start = Cell {
        x: 0,
        y: 0,
        goal: (19, 0),
    };
    let (path, cost) = dijkstra::<_, FibonacciHeap<_>>(&start).unwrap();
    // Down to the gap, across, back up
    assert_eq!(cost, 19 + 2 * 19);
    assert_eq!(path.len() as u32, cost + 1);
    assert!(path.iter().all(|c| !is_wall(c.x, c.y)));
}

#[test]
fn test_astar_matches_dijkstra() {
    for goal in [(19, 0), (5, 17), (12, 3), (0, 19)] {
        let start = Cell { x: 0, y: 0, goal };
        let (_, d) = dijkstra::<_, FibonacciHeap<_>>(&start).unwrap();
        let (_, a) = astar::<_, FibonacciHeap<_>>(&start).unwrap();
        assert_eq!(d, a, "goal {:?}", goal);
    }
}

#[test]
fn test_dense_graph_uses_unit_steps() {
    // Squared gaps make single steps the cheapest way to advance
    let start = Dense { id: 0, n: 30 };
    let (path, cost) = dijkstra::<_, FibonacciHeap<_>>(&start).unwrap();
    assert_eq!(cost, 29);
    let ids: Vec<u32> = path.iter().map(|d| d.id).collect();
    assert_eq!(ids, (0..30).collect::<Vec<_>>());
}

#[test]
fn test_unreachable_goal() {
    let start = Cell {
        x: 0,
        y: 0,
        goal: (10, 0),
    };
    assert!(dijkstra::<_, FibonacciHeap<_>>(&start).is_none());
}
