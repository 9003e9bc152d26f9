use log::{debug, trace};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use crate::algorithm::{ShortestPathFinder, ShortestPathResult};
use crate::data_structures::IndexedMinPq;
use crate::graph::AStarGraph;
use crate::timing::Timer;
use crate::Result;

/// A* best-first search over any [`AStarGraph`] adapter.
///
/// Each `find_shortest_path` call owns its entire frontier state (distance
/// map, predecessor map, priority queue), so one finder can serve many
/// sequential searches and independent finders can run on separate threads
/// as long as the shared adapter tolerates concurrent reads.
///
/// The engine keeps no closed set: once a vertex has a recorded distance it
/// is never re-added to the fringe, only re-prioritised in place. That keeps
/// expansion counts matched to the frontier-id scheme at the cost of some
/// redundant priority updates. Tie-breaking among equal-f vertices follows
/// the heap's internal layout and is not deterministic across changes to the
/// queue implementation.
#[derive(Debug)]
pub struct AStarPathFinder<G> {
    graph: G,
}

impl<G> AStarPathFinder<G> {
    /// Creates a new finder that searches the provided graph adapter
    pub fn new(graph: G) -> Self {
        AStarPathFinder { graph }
    }

    /// Returns a reference to the underlying graph adapter
    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<V, W, G> ShortestPathFinder<V, W> for AStarPathFinder<G>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
    G: AStarGraph<V, W>,
{
    fn find_shortest_path(
        &self,
        start: &V,
        end: &V,
        timeout: Duration,
    ) -> Result<ShortestPathResult<V, W>> {
        let timer = Timer::new(timeout);
        let mut fringe: IndexedMinPq<V, W> = IndexedMinPq::new();
        let mut distances: HashMap<V, W> = HashMap::new();
        let mut predecessor: HashMap<V, V> = HashMap::new();
        let mut states = 0usize;

        distances.insert(start.clone(), W::zero());
        fringe.add(
            start.clone(),
            self.graph.estimated_distance_to_goal(start, end),
        )?;

        while !fringe.is_empty() && !timer.is_time_up() {
            let current = fringe.remove_min()?;
            if current != *start {
                states += 1;
            }
            if current == *end {
                let path = reconstruct_path(&predecessor, start, end);
                // The goal was just popped, so its distance is recorded.
                let cost = distances[end];
                debug!(
                    "solved: cost {:?}, {} vertices, {} states explored",
                    cost,
                    path.len(),
                    states
                );
                return Ok(ShortestPathResult::Solved {
                    path,
                    cost,
                    states_explored: states,
                    elapsed: timer.elapsed(),
                });
            }

            // Every fringe entry was given a distance when it was discovered.
            let dist_current = match distances.get(&current) {
                Some(&dist) => dist,
                None => continue,
            };
            trace!("expanding {:?} at g = {:?}", current, dist_current);

            for edge in self.graph.neighbors(&current) {
                let candidate = dist_current + edge.weight;
                match distances.get(&edge.to) {
                    None => {
                        distances.insert(edge.to.clone(), candidate);
                        predecessor.insert(edge.to.clone(), current.clone());
                        let priority =
                            candidate + self.graph.estimated_distance_to_goal(&edge.to, end);
                        fringe.add(edge.to, priority)?;
                    }
                    Some(&known) if candidate < known => {
                        distances.insert(edge.to.clone(), candidate);
                        predecessor.insert(edge.to.clone(), current.clone());
                        if fringe.contains(&edge.to) {
                            let priority =
                                candidate + self.graph.estimated_distance_to_goal(&edge.to, end);
                            fringe.change_priority(&edge.to, priority)?;
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        if timer.is_time_up() {
            debug!("timed out after {} states explored", states);
            return Ok(ShortestPathResult::Timeout {
                states_explored: states,
                elapsed: timer.elapsed(),
            });
        }

        debug!("frontier drained, goal unreachable after {} states", states);
        Ok(ShortestPathResult::Unsolvable {
            states_explored: states,
            elapsed: timer.elapsed(),
        })
    }
}

/// Walks the predecessor chain from `end` back to `start` and reverses it.
fn reconstruct_path<V>(predecessor: &HashMap<V, V>, start: &V, end: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match predecessor.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            // The chain is complete for any goal the frontier actually popped.
            None => break,
        }
    }
    path.reverse();
    path
}
