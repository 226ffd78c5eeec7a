// src/math/algorithms/minimum_spanning_tree.rs

//! # Minimum Spanning Tree (Kruskal)
//!
//! Sorts the graph's edges by weight and accepts every edge whose endpoints
//! are still in different components of a [`UnionFind`]. A disconnected
//! input yields a spanning forest.

use crate::math::{
    error::{MathError, MathResult},
    structures::{UnionFind, WeightGraph},
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Vergleichsfunktion für Kantengewichte.
pub type WeightComparator<W> = Box<dyn Fn(&W, &W) -> Ordering>;

pub struct MinimumSpanningTree<'g, N, W> {
    graph: &'g WeightGraph<N, W>,
    comparator: Option<WeightComparator<W>>,
}

impl<N: Clone + Eq + Hash, W: Copy> fmt::Debug for MinimumSpanningTree<'_, N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinimumSpanningTree")
            .field("nodes", &self.graph.len())
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

impl<'g, N, W> MinimumSpanningTree<'g, N, W>
where
    N: Clone + Eq + Hash,
    W: Copy + PartialOrd,
{
    pub fn new(graph: &'g WeightGraph<N, W>) -> Self {
        Self {
            graph,
            comparator: None,
        }
    }

    /// Overrides the ascending weight order. Returning `Greater` for
    /// lighter edges, for instance, produces a maximum spanning tree.
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&W, &W) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Returns a new graph holding every node of the input (in the same
    /// order) and only the tree edges.
    pub fn run(&self) -> MathResult<WeightGraph<N, W>> {
        if self.graph.is_empty() {
            return Err(MathError::invalid_argument("MinimumSpanningTree", "graph"));
        }

        let mut edges = self.graph.edge_indices();
        // Stabile Sortierung: gleich schwere Kanten behalten ihre Reihenfolge
        match &self.comparator {
            Some(compare) => edges.sort_by(|a, b| compare(&a.2, &b.2)),
            None => edges.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal)),
        }

        let mut tree = WeightGraph::new();
        for node in self.graph.nodes() {
            tree.add_node(node.clone());
        }

        let mut sets = UnionFind::new(self.graph.len());
        for (a, b, weight) in edges {
            if sets.union(a, b) {
                tree.add_edge(
                    self.graph.node_at(a).clone(),
                    self.graph.node_at(b).clone(),
                    weight,
                );
            }
            if sets.set_count() == 1 {
                break;
            }
        }

        debug!(
            "MinimumSpanningTree: {} nodes, {} of {} edges kept, {} component(s)",
            tree.len(),
            tree.edge_count(),
            self.graph.edge_count(),
            sets.set_count()
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::algorithms::acyclicity::is_acyclic;

    fn fixture() -> WeightGraph<char, u32> {
        let mut graph = WeightGraph::new();
        graph.add_edge('a', 'b', 4);
        graph.add_edge('a', 'c', 1);
        graph.add_edge('b', 'c', 2);
        graph.add_edge('b', 'd', 5);
        graph.add_edge('c', 'd', 8);
        graph.add_edge('c', 'e', 10);
        graph.add_edge('d', 'e', 2);
        graph.add_edge('d', 'f', 6);
        graph.add_edge('e', 'f', 3);
        graph
    }

    fn total_weight(graph: &WeightGraph<char, u32>) -> u32 {
        graph.edges().into_iter().map(|(_, _, w)| w).sum()
    }

    /// Minimum over all spanning subsets of `n - 1` edges.
    fn brute_force_minimum(graph: &WeightGraph<char, u32>) -> u32 {
        let edges = graph.edge_indices();
        let n = graph.len();
        let mut best = u32::MAX;
        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut sets = UnionFind::new(n);
            let mut weight = 0;
            for (i, &(a, b, w)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    sets.union(a, b);
                    weight += w;
                }
            }
            if sets.set_count() == 1 {
                best = best.min(weight);
            }
        }
        best
    }

    #[test]
    fn test_tree_has_n_minus_one_edges() {
        let graph = fixture();
        let tree = MinimumSpanningTree::new(&graph).run().unwrap();
        assert_eq!(tree.len(), graph.len());
        assert_eq!(tree.edge_count(), graph.len() - 1);
        assert!(is_acyclic(&tree));
    }

    #[test]
    fn test_tree_is_minimal() {
        let graph = fixture();
        let tree = MinimumSpanningTree::new(&graph).run().unwrap();
        assert_eq!(total_weight(&tree), brute_force_minimum(&graph));
        assert_eq!(total_weight(&tree), 13);
    }

    #[test]
    fn test_custom_comparator_builds_maximum_tree() {
        let graph = fixture();
        let tree = MinimumSpanningTree::new(&graph)
            .with_comparator(|a: &u32, b: &u32| b.cmp(a))
            .run()
            .unwrap();
        assert_eq!(tree.edge_count(), 5);
        // 10 + 8 + 6 + 5 + 4
        assert_eq!(total_weight(&tree), 33);
    }

    #[test]
    fn test_equal_weights_keep_enumeration_order() {
        let mut graph: WeightGraph<char, u32> = WeightGraph::new();
        graph.add_edge('a', 'b', 1);
        graph.add_edge('b', 'c', 1);
        graph.add_edge('a', 'c', 1);
        let tree = MinimumSpanningTree::new(&graph).run().unwrap();
        assert!(tree.contains_edge(&'a', &'b'));
        assert!(tree.contains_edge(&'a', &'c'));
        assert!(!tree.contains_edge(&'b', &'c'));
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let mut graph: WeightGraph<char, u32> = WeightGraph::new();
        graph.add_edge('a', 'b', 1);
        graph.add_edge('c', 'd', 1);
        graph.add_node('e');
        let forest = MinimumSpanningTree::new(&graph).run().unwrap();
        assert_eq!(forest.len(), 5);
        assert_eq!(forest.edge_count(), 2);
    }

    #[test]
    fn test_debug_output() {
        let graph = fixture();
        let plain = format!("{:?}", MinimumSpanningTree::new(&graph));
        assert_eq!(
            plain,
            "MinimumSpanningTree { nodes: 6, custom_comparator: false }"
        );
        let custom = MinimumSpanningTree::new(&graph).with_comparator(|a: &u32, b: &u32| b.cmp(a));
        assert!(format!("{custom:?}").contains("custom_comparator: true"));
    }

    #[test]
    fn test_empty_graph_is_invalid_argument() {
        let graph: WeightGraph<char, u32> = WeightGraph::new();
        assert_eq!(
            MinimumSpanningTree::new(&graph).run().unwrap_err(),
            MathError::invalid_argument("MinimumSpanningTree", "graph")
        );
    }
}
