use std::time::Duration;

use astar_core::graph::generators::grid_2d;
use astar_core::{AStarGraph, AStarPathFinder, AdjacencyGraph, ShortestPathFinder, WeightedEdge};

/// Grid adapter that adds a straight-line (Euclidean) heuristic on top of the
/// plain adjacency grid.
struct EuclideanGrid {
    grid: AdjacencyGraph<f64>,
    width: usize,
}

impl EuclideanGrid {
    fn coords(&self, vertex: usize) -> (f64, f64) {
        ((vertex % self.width) as f64, (vertex / self.width) as f64)
    }
}

impl AStarGraph<usize, f64> for EuclideanGrid {
    fn neighbors(&self, vertex: &usize) -> Vec<WeightedEdge<usize, f64>> {
        self.grid.neighbors(vertex)
    }

    fn estimated_distance_to_goal(&self, vertex: &usize, goal: &usize) -> f64 {
        let (x1, y1) = self.coords(*vertex);
        let (x2, y2) = self.coords(*goal);
        (x1 - x2).hypot(y1 - y2)
    }
}

fn main() -> Result<(), astar_core::Error> {
    env_logger::init();

    let width = 60;
    let height = 40;
    let graph = EuclideanGrid {
        grid: grid_2d(width, height, true),
        width,
    };

    let start = 0;
    let end = width * height - 1;
    let finder = AStarPathFinder::new(graph);
    let result = finder.find_shortest_path(&start, &end, Duration::from_secs(5))?;

    match result.solution() {
        Some(path) => {
            println!(
                "route of {} vertices, cost {:.3}, {} states explored in {:?}",
                path.len(),
                result.cost().unwrap_or(f64::NAN),
                result.states_explored(),
                result.elapsed()
            );
            let cells: Vec<String> = path
                .iter()
                .map(|v| format!("({},{})", v % width, v / width))
                .collect();
            println!("{}", cells.join(" -> "));
        }
        None => println!(
            "no route: {:?} after {} states",
            result,
            result.states_explored()
        ),
    }

    Ok(())
}
