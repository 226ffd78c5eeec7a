// src/math/types/triangle.rs
use super::{circle::Circle, edge::Edge, point::Point};
use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

/// Dreieck aus drei Punkten.
///
/// Equality ignores vertex order. The circumcircle is computed on first
/// access and cached; for collinear vertices it holds NaN/∞ values.
#[derive(Clone, Debug)]
pub struct Triangle {
    points: [Point; 3],
    circumcircle: OnceCell<Circle>,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p1, p2, p3],
            circumcircle: OnceCell::new(),
        }
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    pub fn edges(&self) -> [Edge; 3] {
        let [p1, p2, p3] = self.points;
        [Edge::new(p1, p2), Edge::new(p2, p3), Edge::new(p3, p1)]
    }

    pub fn circumcircle(&self) -> &Circle {
        self.circumcircle.get_or_init(|| {
            let [a, b, c] = self.points;
            let determinant =
                2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

            let a_sq = a.magnitude_squared();
            let b_sq = b.magnitude_squared();
            let c_sq = c.magnitude_squared();

            let center = Point::new(
                (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / determinant,
                (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / determinant,
            );

            Circle::new(center, center.distance_to(a))
        })
    }

    pub fn contains_vertex(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    pub fn shares_vertex_with(&self, other: &Triangle) -> bool {
        other.points.iter().any(|p| self.contains_vertex(*p))
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges().contains(edge)
    }

    /// Builds a triangle that strictly contains every point of the set.
    ///
    /// The triangle is derived from the bounding box, inflated by
    /// `margin` times the box extent on every side. Returns `None` for an
    /// empty set.
    pub fn super_triangle_of(points: &[Point], margin: f64) -> Option<Triangle> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let extent = (max.x - min.x).max(max.y - min.y).max(1.0) * margin;
        let mid_x = (min.x + max.x) / 2.0;

        Some(Triangle::new(
            Point::new(min.x - extent * 2.0, min.y - extent),
            Point::new(mid_x, max.y + extent * 2.0),
            Point::new(max.x + extent * 2.0, min.y - extent),
        ))
    }

    fn sorted_keys(&self) -> [super::point::PointKey; 3] {
        let mut keys = self.points.map(|p| p.key());
        keys.sort();
        keys
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_keys() == other.sorted_keys()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_keys().hash(state);
    }
}
