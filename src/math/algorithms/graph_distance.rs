// src/math/algorithms/graph_distance.rs

//! Breadth-first hop distance from a start node.

use crate::math::{
    error::{MathError, MathResult},
    structures::WeightGraph,
};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct GraphDistance<'g, N, W> {
    graph: &'g WeightGraph<N, W>,
    start: N,
}

impl<'g, N, W> GraphDistance<'g, N, W>
where
    N: Clone + Eq + Hash,
    W: Copy,
{
    pub fn new(graph: &'g WeightGraph<N, W>, start: N) -> Self {
        Self { graph, start }
    }

    pub fn with_start(mut self, start: N) -> Self {
        self.start = start;
        self
    }

    /// Hop count of every node reachable from the start node (the start
    /// itself has distance 0). Unreachable nodes are absent.
    pub fn run(&self) -> MathResult<HashMap<N, u32>> {
        let start = self
            .graph
            .index_of(&self.start)
            .ok_or(MathError::invalid_argument("GraphDistance", "start_node"))?;

        let mut distances: Vec<Option<u32>> = vec![None; self.graph.len()];
        distances[start] = Some(0);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let next_distance = distances[current].unwrap_or(0) + 1;
            for (neighbor, _) in self.graph.neighbor_indices(current) {
                if distances[neighbor].is_none() {
                    distances[neighbor] = Some(next_distance);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(distances
            .into_iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (self.graph.node_at(i).clone(), d)))
            .collect())
    }
}
