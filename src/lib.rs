//! A* Core - Generic Best-First Graph Search
//!
//! This library provides a heuristic-guided shortest-path engine (A*) together
//! with the indexed min-priority queue it drives as its search frontier.
//!
//! The engine is generic over the vertex type and consults the graph only
//! through the [`AStarGraph`] capability, so the same search runs unmodified
//! over sliding-tile puzzles, street networks, or pixel-energy grids. Searches
//! are single-threaded and cooperatively cancelled through a wall-clock budget;
//! unreachable goals and exceeded deadlines are first-class outcomes of
//! [`ShortestPathResult`], not errors.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod timing;

pub use algorithm::{astar::AStarPathFinder, ShortestPathFinder, ShortestPathResult};
pub use data_structures::IndexedMinPq;
/// Re-export main types for convenient use
pub use graph::{AStarGraph, AdjacencyGraph, WeightedEdge};
pub use timing::Timer;

/// Error types for the library
///
/// These are precondition violations on the priority-queue surface: fail fast,
/// no retry, queue state left unchanged. Search non-termination (unreachable
/// goal, exceeded deadline) is reported through [`ShortestPathResult`] instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("item is already present in the priority queue")]
    DuplicateItem,

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("item is not present in the priority queue")]
    ItemNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
