use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::WeightedEdge;

/// Capability trait a graph adapter implements to be searchable by the A*
/// engine.
///
/// The engine treats the graph as stateless and read-only: it only ever asks
/// for outgoing edges and heuristic estimates. Adapters shared across threads
/// must therefore be safe for concurrent reads, but the core itself takes no
/// locks.
pub trait AStarGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the outgoing edges of `vertex`, in adapter-defined order.
    ///
    /// Produced fresh on every call; the core does no caching. May be empty
    /// for a leaf vertex.
    fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V, W>>;

    /// Returns a lower-bound estimate of the remaining cost from `vertex` to
    /// `goal`.
    ///
    /// For the engine's shortest-path guarantee to hold the estimate must be
    /// admissible (never overestimates) and consistent (triangle inequality
    /// across edges). The core does not validate either property; a violating
    /// heuristic silently degrades the result to sub-optimal.
    fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> W;
}
