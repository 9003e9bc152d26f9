use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use astar_core::graph::generators::{grid_2d, random_graph};
use astar_core::{
    AStarGraph, AStarPathFinder, AdjacencyGraph, ShortestPathFinder, ShortestPathResult,
    WeightedEdge,
};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f64 = 1e-9;

// Reference Dijkstra used as an oracle for the zero-heuristic searches.
fn dijkstra_distances(graph: &AdjacencyGraph<f64>, source: usize) -> Vec<Option<f64>> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<f64>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source] = Some(0.0);
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(dist_u), u))) = heap.pop() {
        if let Some(best) = distances[u] {
            if best < dist_u {
                continue;
            }
        }
        for edge in graph.neighbors(&u) {
            let new_dist = dist_u + edge.weight;
            let should_update = match distances[edge.to] {
                None => true,
                Some(current) => new_dist < current,
            };
            if should_update {
                distances[edge.to] = Some(new_dist);
                heap.push(Reverse((OrderedFloat(new_dist), edge.to)));
            }
        }
    }

    distances
}

#[test]
fn test_diamond_graph_prefers_cheaper_long_path() {
    // A -> B -> C -> D at cost 3 beats the direct A -> D at cost 10
    let mut graph: AdjacencyGraph<f64> = AdjacencyGraph::with_capacity(4);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(0, 3, 10.0);

    let finder = AStarPathFinder::new(graph);
    let result = finder
        .find_shortest_path(&0, &3, Duration::from_secs(10))
        .unwrap();

    assert_eq!(result.solution(), Some(&[0, 1, 2, 3][..]));
    assert!((result.cost().unwrap() - 3.0).abs() < EPS);
    // Popped B, C, and the goal; only the start pop is uncounted
    assert_eq!(result.states_explored(), 3);
}

#[test]
fn test_disconnected_goal_is_unsolvable() {
    let mut graph = AdjacencyGraph::with_capacity(4);
    graph.add_edge(0, 1, 1.0);
    // 2 and 3 form their own island
    graph.add_edge(2, 3, 1.0);

    let finder = AStarPathFinder::new(graph);
    let result = finder
        .find_shortest_path(&0, &3, Duration::from_secs(10))
        .unwrap();

    match result {
        ShortestPathResult::Unsolvable {
            states_explored, ..
        } => assert!(states_explored <= 2),
        other => panic!("expected Unsolvable, got {:?}", other),
    }
}

#[test]
fn test_near_zero_timeout_reports_timeout() {
    let graph = grid_2d(150, 150, true);
    let goal = graph.vertex_count() - 1;

    let finder = AStarPathFinder::new(graph);
    let result = finder
        .find_shortest_path(&0, &goal, Duration::ZERO)
        .unwrap();

    match result {
        ShortestPathResult::Timeout {
            states_explored,
            elapsed,
        } => {
            assert_eq!(states_explored, 0);
            assert!(elapsed < Duration::from_secs(5), "must not block");
        }
        other => panic!("expected Timeout, got {:?}", other),
    }
}

#[test]
fn test_start_equals_end() {
    let mut graph: AdjacencyGraph<f64> = AdjacencyGraph::with_capacity(2);
    graph.add_edge(0, 1, 1.0);

    let finder = AStarPathFinder::new(graph);
    let result = finder
        .find_shortest_path(&0, &0, Duration::from_secs(10))
        .unwrap();

    assert_eq!(result.solution(), Some(&[0][..]));
    assert!(result.cost().unwrap().abs() < EPS);
    assert_eq!(result.states_explored(), 0);
}

#[test]
fn test_zero_heuristic_matches_dijkstra() {
    let mut rng = StdRng::seed_from_u64(1234);
    let graph = random_graph(80, 400, 50.0, &mut rng);
    let oracle = dijkstra_distances(&graph, 0);

    let finder = AStarPathFinder::new(graph);
    for target in 0..80usize {
        let result = finder
            .find_shortest_path(&0, &target, Duration::from_secs(10))
            .unwrap();
        match oracle[target] {
            Some(expected) => {
                let cost = result
                    .cost()
                    .unwrap_or_else(|| panic!("vertex {} should be reachable", target));
                assert!(
                    (cost - expected).abs() < EPS,
                    "vertex {}: a* found {}, dijkstra found {}",
                    target,
                    cost,
                    expected
                );
            }
            None => assert!(
                !result.is_solved(),
                "vertex {} should be unreachable",
                target
            ),
        }
    }
}

#[test]
fn test_random_graph_lands_requested_edge_count() {
    let mut rng = StdRng::seed_from_u64(9);
    let graph = random_graph(10, 60, 5.0, &mut rng);
    assert_eq!(graph.edge_count(), 60);

    // Requests beyond the simple-graph capacity saturate instead of spinning
    let mut rng = StdRng::seed_from_u64(10);
    let dense = random_graph(5, 1000, 5.0, &mut rng);
    assert_eq!(dense.edge_count(), 20);
}

#[test]
fn test_path_endpoints_and_cost_sum() {
    let graph = grid_2d(12, 9, true);
    let start = 3;
    let end = graph.vertex_count() - 2;

    let finder = AStarPathFinder::new(graph);
    let result = finder
        .find_shortest_path(&start, &end, Duration::from_secs(10))
        .unwrap();

    let path = result.solution().expect("grid is connected");
    assert_eq!(*path.first().unwrap(), start);
    assert_eq!(*path.last().unwrap(), end);

    let mut total = 0.0;
    for pair in path.windows(2) {
        let weight = finder
            .graph()
            .edge_weight(pair[0], pair[1])
            .expect("path must follow existing edges");
        total += weight;
    }
    assert!((total - result.cost().unwrap()).abs() < EPS);
}

// Grid adapter with a Manhattan-distance heuristic; admissible and consistent
// on a 4-connected unit grid.
struct ManhattanGrid {
    grid: AdjacencyGraph<f64>,
    width: usize,
}

impl AStarGraph<usize, f64> for ManhattanGrid {
    fn neighbors(&self, vertex: &usize) -> Vec<WeightedEdge<usize, f64>> {
        self.grid.neighbors(vertex)
    }

    fn estimated_distance_to_goal(&self, vertex: &usize, goal: &usize) -> f64 {
        let (x1, y1) = (vertex % self.width, vertex / self.width);
        let (x2, y2) = (goal % self.width, goal / self.width);
        (x1.abs_diff(x2) + y1.abs_diff(y2)) as f64
    }
}

#[test]
fn test_heuristic_preserves_cost_and_prunes_work() {
    let width = 20;
    let height = 15;
    let start = 0;
    let end = width * height - 1;

    let blind = AStarPathFinder::new(grid_2d(width, height, false));
    let blind_result = blind
        .find_shortest_path(&start, &end, Duration::from_secs(10))
        .unwrap();

    let guided = AStarPathFinder::new(ManhattanGrid {
        grid: grid_2d(width, height, false),
        width,
    });
    let guided_result = guided
        .find_shortest_path(&start, &end, Duration::from_secs(10))
        .unwrap();

    let blind_cost = blind_result.cost().expect("grid is connected");
    let guided_cost = guided_result.cost().expect("grid is connected");
    assert!((blind_cost - guided_cost).abs() < EPS);

    // A consistent heuristic can only shrink the frontier work
    assert!(guided_result.states_explored() <= blind_result.states_explored());
}
