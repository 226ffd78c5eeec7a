// src/math/types/point.rs
use crate::math::utils::{comparison, constants::POINT_GRID};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 2D point.
///
/// Equality and hashing work on the coordinates snapped to a grid of
/// [`POINT_GRID`], so two points closer than the grid spacing are the same
/// map key and `Eq`/`Hash` never disagree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Quantisierte Koordinaten eines [`Point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(pub i64, pub i64);

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn key(&self) -> PointKey {
        PointKey(
            (self.x / POINT_GRID).round() as i64,
            (self.y / POINT_GRID).round() as i64,
        )
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn normalized(&self) -> Point {
        let magnitude = self.magnitude();
        Point::new(self.x / magnitude, self.y / magnitude)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).magnitude()
    }

    pub fn distance_squared_to(&self, other: Point) -> f64 {
        (*self - other).magnitude_squared()
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// `true` if `self` comes before `other` ordering by x, then y.
    pub fn is_xy_ordered_with(&self, other: Point) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }

    /// `true` if `self` comes before `other` ordering by y, then x.
    pub fn is_yx_ordered_with(&self, other: Point) -> bool {
        self.y < other.y || (self.y == other.y && self.x < other.x)
    }

    pub fn approx_eq(&self, other: Point) -> bool {
        comparison::nearly_equal(self.x, other.x) && comparison::nearly_equal(self.y, other.y)
    }

    /// Spiegelt `other` am Punkt `center`.
    pub fn reflect(center: Point, other: Point) -> Point {
        center * 2.0 - other
    }

    /// Schwerpunkt einer Punktmenge. `None` für eine leere Menge.
    pub fn centroid<I>(points: I) -> Option<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut sum = Point::ZERO;
        let mut count = 0usize;
        for point in points {
            sum = sum + point;
            count += 1;
        }
        (count > 0).then(|| sum / count as f64)
    }

    /// Orientation of the triplet, i.e. `(center - start) x (end - start)`.
    /// - Result > 0: counter-clockwise (left) turn.
    /// - Result < 0: clockwise (right) turn.
    /// - Result ≈ 0: collinear.
    #[inline]
    pub fn counter_clockwise(start: Point, center: Point, end: Point) -> f64 {
        (center.x - start.x) * (end.y - start.y) - (center.y - start.y) * (end.x - start.x)
    }

    /// [`Point::counter_clockwise`] reduced to -1, 0 or 1.
    pub fn signed_counter_clockwise(start: Point, center: Point, end: Point) -> i32 {
        comparison::sign(Self::counter_clockwise(start, center, end))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_nearby_points_share_a_key() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0 + 1e-9, 2.0 - 1e-9);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(a, Point::new(1.001, 2.0));
    }

    #[test]
    fn test_reflect_and_centroid() {
        let reflected = Point::reflect(Point::new(1.0, 1.0), Point::new(0.0, 0.0));
        assert_eq!(reflected, Point::new(2.0, 2.0));

        let centroid = Point::centroid([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        assert_relative_eq!(centroid.x, 1.0);
        assert_relative_eq!(centroid.y, 1.0);
        assert!(Point::centroid(Vec::new()).is_none());
    }

    #[test]
    fn test_counter_clockwise_sign() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert_eq!(Point::signed_counter_clockwise(a, b, Point::new(1.0, 1.0)), 1);
        assert_eq!(Point::signed_counter_clockwise(a, b, Point::new(1.0, -1.0)), -1);
        assert_eq!(Point::signed_counter_clockwise(a, b, Point::new(2.0, 0.0)), 0);
    }

    #[test]
    fn test_magnitude_and_ordering() {
        let p = Point::new(3.0, 4.0);
        assert_relative_eq!(p.magnitude(), 5.0);
        assert_relative_eq!(p.normalized().magnitude(), 1.0);
        assert!(Point::new(0.0, 5.0).is_xy_ordered_with(Point::new(1.0, 0.0)));
        assert!(Point::new(1.0, 0.0).is_yx_ordered_with(Point::new(0.0, 5.0)));
    }
}
