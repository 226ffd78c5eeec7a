// src/math/structures/mod.rs

// Generische Datenstrukturen für die Algorithmen
pub mod binary_tree;
pub mod union_find;
pub mod unordered_pair;
pub mod weight_graph;

pub use self::binary_tree::{BinaryTree, NodeIndex, TraversalOrder};
pub use self::union_find::UnionFind;
pub use self::unordered_pair::UnorderedPair;
pub use self::weight_graph::{Connection, WeightGraph};
