// src/math/algorithms/mod.rs

// Deklaration der Algorithmen der Layout-Pipeline
pub mod acyclicity;
pub mod binary_space_partition;
pub mod convex_hull;
pub mod graph_distance;
pub mod minimum_spanning_tree;
pub mod perpendicular_filter;
pub mod rotating_calipers;
pub mod triangulation; // Bowyer-Watson

// Re-Exporte für den direkten Zugriff auf die Algorithmen und deren Ergebnisse.

// Raumaufteilung
pub use self::binary_space_partition::{BinarySpacePartition, SpacePartition};

// Triangulation
pub use self::triangulation::{Triangulation, TriangulationResult};

// Konvexe Hülle und Durchmesser
pub use self::convex_hull::{ConvexHull, ConvexHullAlgorithm};
pub use self::rotating_calipers::{CaliperPair, RotatingCalipers};

// Graphen
pub use self::acyclicity::is_acyclic;
pub use self::graph_distance::GraphDistance;
pub use self::minimum_spanning_tree::{MinimumSpanningTree, WeightComparator};

pub use self::perpendicular_filter::PerpendicularFilter;
