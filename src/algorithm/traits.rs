use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crate::Result;

/// Outcome of one shortest-path search attempt.
///
/// An unreachable goal and an exceeded deadline are terminal outcomes of the
/// search, not errors; both still report how much work was done.
/// `states_explored` counts vertices popped from the fringe, excluding the
/// start vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPathResult<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// A least-cost path was found before the deadline.
    Solved {
        /// Vertices from start to goal inclusive
        path: Vec<V>,
        /// Total weight of the path
        cost: W,
        states_explored: usize,
        elapsed: Duration,
    },

    /// The frontier drained without reaching the goal.
    Unsolvable {
        states_explored: usize,
        elapsed: Duration,
    },

    /// The wall-clock budget ran out before the goal was popped.
    Timeout {
        states_explored: usize,
        elapsed: Duration,
    },
}

impl<V, W> ShortestPathResult<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true for the Solved variant
    pub fn is_solved(&self) -> bool {
        matches!(self, ShortestPathResult::Solved { .. })
    }

    /// Returns the solution path if the search solved
    pub fn solution(&self) -> Option<&[V]> {
        match self {
            ShortestPathResult::Solved { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the solution cost if the search solved
    pub fn cost(&self) -> Option<W> {
        match self {
            ShortestPathResult::Solved { cost, .. } => Some(*cost),
            _ => None,
        }
    }

    /// Returns the number of vertices expanded during the search
    pub fn states_explored(&self) -> usize {
        match self {
            ShortestPathResult::Solved {
                states_explored, ..
            }
            | ShortestPathResult::Unsolvable {
                states_explored, ..
            }
            | ShortestPathResult::Timeout {
                states_explored, ..
            } => *states_explored,
        }
    }

    /// Returns the wall-clock time the search took
    pub fn elapsed(&self) -> Duration {
        match self {
            ShortestPathResult::Solved { elapsed, .. }
            | ShortestPathResult::Unsolvable { elapsed, .. }
            | ShortestPathResult::Timeout { elapsed, .. } => *elapsed,
        }
    }
}

/// Trait for point-to-point shortest-path engines
pub trait ShortestPathFinder<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Computes a least-cost path from `start` to `end` within the given
    /// wall-clock budget.
    fn find_shortest_path(
        &self,
        start: &V,
        end: &V,
        timeout: Duration,
    ) -> Result<ShortestPathResult<V, W>>;
}
