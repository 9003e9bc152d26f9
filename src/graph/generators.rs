use rand::prelude::*;

use crate::graph::AdjacencyGraph;

/// Generates a 2D grid graph with the given dimensions.
///
/// Vertices are numbered row-major (`y * width + x`). Cardinal moves cost 1;
/// when `diagonal` is set, diagonal moves are added at cost sqrt(2).
pub fn grid_2d(width: usize, height: usize, diagonal: bool) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    let cardinal = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];
    let diagonals = [(1i32, -1i32), (1, 1), (-1, 1), (-1, -1)];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let mut moves: Vec<(i32, i32, f64)> =
                cardinal.iter().map(|&(dx, dy)| (dx, dy, 1.0)).collect();
            if diagonal {
                moves.extend(
                    diagonals
                        .iter()
                        .map(|&(dx, dy)| (dx, dy, std::f64::consts::SQRT_2)),
                );
            }

            for (dx, dy, cost) in moves {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, cost);
                }
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` vertices and `m` distinct
/// edges.
///
/// Weights are drawn uniformly from `(0, max_weight]`. Self-loops are
/// skipped and duplicate picks are retried, so exactly `m` edges land unless
/// `m` exceeds the `n * (n - 1)` capacity of a simple directed graph, in
/// which case the graph saturates at that capacity. Connectivity is not
/// guaranteed.
pub fn random_graph<R: Rng>(n: usize, m: usize, max_weight: f64, rng: &mut R) -> AdjacencyGraph<f64> {
    assert!(n > 1, "need at least two vertices");

    let target = m.min(n * (n - 1));
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut added = 0;
    while added < target {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to || graph.has_edge(from, to) {
            continue;
        }
        let weight = rng.gen_range(f64::EPSILON..=max_weight);
        graph.add_edge(from, to, weight);
        added += 1;
    }

    graph
}
