// src/math/algorithms/acyclicity.rs

use crate::math::structures::{UnionFind, WeightGraph};
use std::hash::Hash;

/// Checks an undirected graph for cycles with a union-find pass.
///
/// Every edge is visited once. If its endpoints already share a root the
/// graph has a cycle, otherwise the endpoints are merged.
pub fn is_acyclic<N, W>(graph: &WeightGraph<N, W>) -> bool
where
    N: Clone + Eq + Hash,
    W: Copy,
{
    let mut sets = UnionFind::new(graph.len());
    graph
        .edge_indices()
        .into_iter()
        .all(|(a, b, _)| sets.union(a, b))
}
