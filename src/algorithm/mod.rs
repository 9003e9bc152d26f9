pub mod astar;
pub mod traits;

pub use astar::AStarPathFinder;
pub use traits::{ShortestPathFinder, ShortestPathResult};
