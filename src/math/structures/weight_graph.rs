// src/math/structures/weight_graph.rs

//! # Weighted Graph
//!
//! Undirected graph with weighted edges. Nodes are unique by value and keep
//! their insertion order; every node owns a list of `(neighbor, weight)`
//! records. Symmetry is enforced in [`WeightGraph::add_edge`], the only way
//! to create an edge.

use crate::math::types::{Edge, Point};
use std::collections::HashMap;
use std::hash::Hash;

/// Eine gerichtete Sicht auf eine Kante: Ziel und Gewicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection<'a, N, W> {
    pub target: &'a N,
    pub weight: W,
}

#[derive(Debug, Clone)]
pub struct WeightGraph<N, W = f64> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<N, W> Default for WeightGraph<N, W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<N, W> WeightGraph<N, W>
where
    N: Clone + Eq + Hash,
    W: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Knoten in Einfügereihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Fügt einen Knoten hinzu, falls er noch nicht existiert, und gibt seinen Index zurück.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        i
    }

    /// Adds the undirected edge `a`–`b`, inserting missing nodes. Adding an
    /// existing edge again replaces its weight.
    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        Self::upsert(&mut self.adjacency[ia], ib, weight);
        Self::upsert(&mut self.adjacency[ib], ia, weight);
    }

    fn upsert(list: &mut Vec<(usize, W)>, target: usize, weight: W) {
        match list.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = weight,
            None => list.push((target, weight)),
        }
    }

    pub fn contains_edge(&self, a: &N, b: &N) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.adjacency[ia].iter().any(|(t, _)| *t == ib),
            _ => false,
        }
    }

    pub fn weight_of(&self, a: &N, b: &N) -> Option<W> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.adjacency[ia]
            .iter()
            .find(|(t, _)| *t == ib)
            .map(|(_, w)| *w)
    }

    /// Nachbarn eines Knotens; `None` falls der Knoten nicht im Graphen ist.
    pub fn connections_of(&self, node: &N) -> Option<Vec<Connection<'_, N, W>>> {
        let i = *self.index.get(node)?;
        Some(
            self.adjacency[i]
                .iter()
                .map(|&(t, weight)| Connection {
                    target: &self.nodes[t],
                    weight,
                })
                .collect(),
        )
    }

    pub fn degree_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).map(|&i| self.adjacency[i].len())
    }

    /// Every undirected edge exactly once, as `(a, b, weight)` with `a`
    /// inserted before `b`. Order follows node insertion order.
    pub fn edges(&self) -> Vec<(&N, &N, W)> {
        let mut result = Vec::new();
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &(j, weight) in neighbors {
                if i < j {
                    result.push((&self.nodes[i], &self.nodes[j], weight));
                }
            }
        }
        result
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn node_at(&self, index: usize) -> &N {
        &self.nodes[index]
    }

    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.adjacency[index].iter().copied()
    }

    /// Index-based edge list used by the graph algorithms.
    pub(crate) fn edge_indices(&self) -> Vec<(usize, usize, W)> {
        let mut result = Vec::new();
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &(j, weight) in neighbors {
                if i < j {
                    result.push((i, j, weight));
                }
            }
        }
        result
    }
}

impl WeightGraph<Point, f64> {
    /// Graph aus Kanten, Gewicht = euklidische Länge.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.start, edge.end, edge.length());
        }
        graph
    }

    pub fn to_edges(&self) -> Vec<Edge> {
        self.edges()
            .into_iter()
            .map(|(a, b, _)| Edge::new(*a, *b))
            .collect()
    }
}
