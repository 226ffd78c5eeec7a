// src/math/types/edge.rs
use super::point::Point;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unordered line segment between two points.
///
/// `Edge::new(a, b) == Edge::new(b, a)`, and both hash identically: the hash
/// is built from the two point keys in canonical (min, max) order.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn swapped(&self) -> Edge {
        Edge::new(self.end, self.start)
    }

    pub fn is_xy_ordered(&self) -> bool {
        self.start.is_xy_ordered_with(self.end)
    }

    pub fn is_yx_ordered(&self) -> bool {
        self.start.is_yx_ordered_with(self.end)
    }

    /// Same edge with `start` before `end` in x-then-y order.
    pub fn xy_ordered(&self) -> Edge {
        if self.is_xy_ordered() { *self } else { self.swapped() }
    }

    /// Same edge with `start` before `end` in y-then-x order.
    pub fn yx_ordered(&self) -> Edge {
        if self.is_yx_ordered() { *self } else { self.swapped() }
    }

    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    pub fn translate(&self, offset: Point) -> Edge {
        Edge::new(self.start + offset, self.end + offset)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.start == point || self.end == point
    }

    /// Segment intersection test. Touching endpoints and collinear overlap
    /// both count as intersecting.
    pub fn intersects(&self, other: &Edge) -> bool {
        let left = Point::signed_counter_clockwise(self.start, self.end, other.start)
            * Point::signed_counter_clockwise(self.start, self.end, other.end);
        let right = Point::signed_counter_clockwise(other.start, other.end, self.start)
            * Point::signed_counter_clockwise(other.start, other.end, self.end);

        if left == 0 && right == 0 {
            let a = self.xy_ordered();
            let b = other.xy_ordered();

            // Vertikale Kanten über y vergleichen
            let axis = |p: Point| if a.start.x == a.end.x { p.y } else { p.x };

            return axis(b.start) <= axis(a.end) && axis(a.start) <= axis(b.end);
        }

        left <= 0 && right <= 0
    }

    fn canonical_keys(&self) -> (super::point::PointKey, super::point::PointKey) {
        let (a, b) = (self.start.key(), self.end.key());
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_keys() == other.canonical_keys()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_keys().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge: [ Start: {}, End: {} ]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge {
        Edge::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_edge_equality_is_symmetric() {
        let a = edge(0.0, 0.0, 1.0, 1.0);
        let b = a.swapped();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_ordering_views() {
        let e = edge(2.0, 0.0, 1.0, 5.0);
        assert!(!e.is_xy_ordered());
        assert_eq!(e.xy_ordered().start, Point::new(1.0, 5.0));
        assert!(e.is_yx_ordered());
        assert_eq!(e.yx_ordered().start, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_crossing_segments_intersect() {
        assert!(edge(0.0, 0.0, 2.0, 2.0).intersects(&edge(0.0, 2.0, 2.0, 0.0)));
        assert!(!edge(0.0, 0.0, 1.0, 0.0).intersects(&edge(0.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_collinear_overlap() {
        assert!(edge(0.0, 0.0, 2.0, 0.0).intersects(&edge(1.0, 0.0, 3.0, 0.0)));
        assert!(!edge(0.0, 0.0, 1.0, 0.0).intersects(&edge(2.0, 0.0, 3.0, 0.0)));
        // vertical
        assert!(edge(0.0, 3.0, 0.0, 0.0).intersects(&edge(0.0, 2.0, 0.0, 5.0)));
        assert!(!edge(0.0, 0.0, 0.0, 1.0).intersects(&edge(0.0, 2.0, 0.0, 5.0)));
    }

    #[test]
    fn test_touching_endpoints_intersect() {
        assert!(edge(0.0, 0.0, 1.0, 1.0).intersects(&edge(1.0, 1.0, 2.0, 0.0)));
    }
}
