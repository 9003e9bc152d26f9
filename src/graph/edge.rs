use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed edge leaving an implicit source vertex.
///
/// Produced transiently by [`AStarGraph::neighbors`](crate::AStarGraph) and
/// owned by the caller; the engine reads it once during relaxation and drops
/// it. Weights are expected to be non-negative; the core does not check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Target vertex of the edge
    pub to: V,

    /// Edge weight, >= 0
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new edge to `to` with the given weight
    pub fn new(to: V, weight: W) -> Self {
        WeightedEdge { to, weight }
    }
}
