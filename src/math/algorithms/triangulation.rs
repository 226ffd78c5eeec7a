// src/math/algorithms/triangulation.rs

//! # Delaunay Triangulation (Bowyer–Watson)
//!
//! Incremental triangulation: each inserted point removes every triangle
//! whose circumcircle contains it and re-triangulates the resulting cavity
//! by fanning its boundary edges to the new point.
//!
//! Collinear input produces degenerate triangles with non-finite
//! circumcircles; that case is not guarded.

use crate::math::{
    error::{MathError, MathResult},
    types::{Edge, Point, Triangle},
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Inflation of the super-triangle relative to the input's bounding box.
const SUPER_TRIANGLE_MARGIN: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    points: Vec<Point>,
}

/// Ergebnis der Triangulation.
#[derive(Debug, Clone)]
pub struct TriangulationResult {
    pub triangles: Vec<Triangle>,
    /// Deduplicated edges of `triangles`, in first-seen order.
    pub edges: Vec<Edge>,
    pub super_triangle: Triangle,
}

impl Triangulation {
    /// Duplicate points are the caller's responsibility.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn run(&self) -> MathResult<TriangulationResult> {
        let super_triangle = Triangle::super_triangle_of(&self.points, SUPER_TRIANGLE_MARGIN)
            .ok_or(MathError::invalid_argument("Triangulation", "points"))?;

        // Geordnete Vec statt HashSet, damit das Ergebnis reproduzierbar bleibt.
        let mut triangles = vec![super_triangle.clone()];

        for &point in &self.points {
            let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
                .into_iter()
                .partition(|t| t.circumcircle().contains_point(point));
            triangles = good;

            for edge in cavity_boundary(&bad) {
                triangles.push(Triangle::new(edge.start, edge.end, point));
            }
        }

        let super_vertices = *super_triangle.points();
        triangles.retain(|t| !super_vertices.iter().any(|v| t.contains_vertex(*v)));

        let mut seen = HashSet::new();
        let edges: Vec<Edge> = triangles
            .iter()
            .flat_map(|t| t.edges())
            .filter(|e| seen.insert(*e))
            .collect();

        debug!(
            "Triangulation: {} points -> {} triangles, {} edges",
            self.points.len(),
            triangles.len(),
            edges.len()
        );

        Ok(TriangulationResult {
            triangles,
            edges,
            super_triangle,
        })
    }
}

/// Edges that belong to exactly one of the given triangles, in first-seen
/// order. Edges shared by two triangles are interior to the cavity.
fn cavity_boundary(bad_triangles: &[Triangle]) -> Vec<Edge> {
    let mut counts: HashMap<Edge, usize> = HashMap::new();
    let mut order = Vec::new();
    for edge in bad_triangles.iter().flat_map(|t| t.edges()) {
        let count = counts.entry(edge).or_insert(0);
        if *count == 0 {
            order.push(edge);
        }
        *count += 1;
    }
    order.into_iter().filter(|e| counts[e] == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::probability::SeedResource;
    use spade::{DelaunayTriangulation, Point2, Triangulation as _};

    fn random_points(count: usize, seed: u64) -> Vec<Point> {
        let mut seed_resource = SeedResource::from_seed(seed);
        (0..count)
            .map(|_| {
                Point::new(
                    seed_resource.next_f64_in_inclusive_range(0.0, 100.0),
                    seed_resource.next_f64_in_inclusive_range(0.0, 100.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_triangle() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ];
        let result = Triangulation::new(points.clone()).run().unwrap();
        assert_eq!(result.triangles.len(), 1);
        assert_eq!(result.edges.len(), 3);
        assert_eq!(
            result.triangles[0],
            Triangle::new(points[0], points[1], points[2])
        );
    }

    #[test]
    fn test_empty_input_is_invalid_argument() {
        let err = Triangulation::new(Vec::new()).run().unwrap_err();
        assert_eq!(err, MathError::invalid_argument("Triangulation", "points"));
    }

    #[test]
    fn test_empty_circumcircle_property() {
        let points = random_points(40, 17);
        let result = Triangulation::new(points.clone()).run().unwrap();

        for triangle in &result.triangles {
            let circle = triangle.circumcircle();
            for &p in &points {
                if triangle.contains_vertex(p) {
                    continue;
                }
                assert!(
                    circle.center.distance_to(p) >= circle.radius - 1e-7,
                    "{p} lies inside the circumcircle of {:?}",
                    triangle.points()
                );
            }
        }
    }

    #[test]
    fn test_every_point_is_a_vertex() {
        let points = random_points(30, 5);
        let result = Triangulation::new(points.clone()).run().unwrap();
        for p in points {
            assert!(result.triangles.iter().any(|t| t.contains_vertex(p)));
        }
    }

    #[test]
    fn test_matches_spade_edge_set() {
        // Feste Ecken als Hülle, zufällige Punkte mit Abstand zum Rand
        let mut points = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        points.extend(
            random_points(25, 123)
                .into_iter()
                .map(|p| Point::new(10.0 + p.x * 0.8, 10.0 + p.y * 0.8)),
        );
        let result = Triangulation::new(points.clone()).run().unwrap();

        let mut reference: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
        for p in &points {
            reference.insert(Point2::new(p.x, p.y)).unwrap();
        }
        let expected: HashSet<Edge> = reference
            .undirected_edges()
            .map(|edge| {
                let [a, b] = edge.positions();
                Edge::new(Point::new(a.x, a.y), Point::new(b.x, b.y))
            })
            .collect();
        let actual: HashSet<Edge> = result.edges.iter().copied().collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let points = random_points(20, 8);
        let a = Triangulation::new(points.clone()).run().unwrap();
        let b = Triangulation::new(points).run().unwrap();
        assert_eq!(a.edges, b.edges);
    }
}
