use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::traits::AStarGraph;
use crate::graph::WeightedEdge;

/// A directed graph over `usize` vertices using adjacency lists.
///
/// The crate's own concrete [`AStarGraph`] implementation, used by the
/// generators, tests, and demos. It reports a zero heuristic, so searching it
/// degenerates to Dijkstra; domain adapters with real heuristics live outside
/// the core.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            vertex_count: 0,
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = AdjacencyGraph {
            vertex_count: vertices,
            outgoing_edges: HashMap::with_capacity(vertices),
        };
        for v in 0..vertices {
            graph.outgoing_edges.insert(v, Vec::new());
        }
        graph
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.outgoing_edges.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    /// Adds a directed edge between existing vertices.
    ///
    /// Returns false (and adds nothing) if either endpoint is unknown or the
    /// weight is negative; an existing edge gets its weight updated instead.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }
        let outgoing = self.outgoing_edges.entry(from).or_default();
        for edge in outgoing.iter_mut() {
            if edge.0 == to {
                edge.1 = weight;
                return true;
            }
        }
        outgoing.push((to, weight));
        true
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(&from)
            .map(|edges| edges.iter().any(|(target, _)| *target == to))
            .unwrap_or(false)
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges.get(&from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        })
    }
}

impl<W> AStarGraph<usize, W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn neighbors(&self, vertex: &usize) -> Vec<WeightedEdge<usize, W>> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => edges
                .iter()
                .map(|&(to, weight)| WeightedEdge::new(to, weight))
                .collect(),
            None => Vec::new(),
        }
    }

    fn estimated_distance_to_goal(&self, _vertex: &usize, _goal: &usize) -> W {
        W::zero()
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
