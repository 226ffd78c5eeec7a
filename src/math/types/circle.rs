// src/math/types/circle.rs
use super::point::Point;
use crate::math::utils::comparison;
use std::fmt;

#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Inclusive: points on the boundary are contained.
    pub fn contains_point(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && comparison::nearly_equal(self.radius, other.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle: [ Center: {}, Radius: {} ]", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_is_inclusive() {
        let circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        assert!(circle.contains_point(Point::new(1.0, 0.0)));
        assert!(circle.contains_point(Point::new(0.5, 0.5)));
        assert!(!circle.contains_point(Point::new(1.0, 1.0)));
    }
}
