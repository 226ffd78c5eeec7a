// src/math/algorithms/convex_hull.rs

//! # Convex Hull Algorithms Module
//!
//! Computes the convex hull of a set of 2D points. The convex hull is the
//! smallest convex polygon that encloses all the given points.
//!
//! ## Supported Algorithms:
//! - Graham Scan (default)
//! - Andrew's Monotone Chain
//!
//! The resulting hull points are returned in counter-clockwise (CCW) order
//! without repeating the first point at the end.

use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::constants,
};
use std::cmp::Ordering;
use tracing::debug;

/// Enumerates the available algorithms for computing the convex hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvexHullAlgorithm {
    /// Graham Scan algorithm. Time complexity: O(n log n).
    #[default]
    GrahamScan,
    /// Andrew's Monotone Chain algorithm. Time complexity: O(n log n).
    AndrewMonotone,
}

/// Computes the convex hull of a set of 2D points using a specified algorithm.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point>,
    algorithm: ConvexHullAlgorithm,
    /// Tolerance for floating-point comparisons, e.g., for determining collinearity.
    tolerance: f64,
}

impl ConvexHull {
    /// Creates a hull computation over `points` using Graham scan.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            algorithm: ConvexHullAlgorithm::default(),
            tolerance: constants::EPSILON,
        }
    }

    pub fn with_algorithm(mut self, algorithm: ConvexHullAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the tolerance for floating-point comparisons.
    ///
    /// # Arguments
    /// * `tolerance` - The desired tolerance value. Must be non-negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Computes the hull.
    ///
    /// # Returns
    /// The hull vertices in CCW order, starting at the lowest point (lowest x
    /// on ties) for Graham scan. Fewer than three input points are returned
    /// as they are; an empty input is an error.
    pub fn run(&self) -> MathResult<Vec<Point>> {
        if self.points.is_empty() {
            return Err(MathError::invalid_argument("ConvexHull", "points"));
        }

        let hull = match self.algorithm {
            ConvexHullAlgorithm::GrahamScan => self.graham_scan(),
            ConvexHullAlgorithm::AndrewMonotone => self.andrew_monotone(),
        };

        debug!(
            "ConvexHull ({:?}): {} points -> {} hull vertices",
            self.algorithm,
            self.points.len(),
            hull.len()
        );
        Ok(hull)
    }

    /// Implements the Graham Scan algorithm for convex hull.
    fn graham_scan(&self) -> Vec<Point> {
        // 1. Find p0: the point with the smallest y-coordinate. If ties, pick the one with smallest x.
        let mut p0 = self.points[0];
        for &p in &self.points[1..] {
            if p.y < p0.y || (p.y == p0.y && p.x < p0.x) {
                p0 = p;
            }
        }

        let mut local_points: Vec<Point> =
            self.points.iter().copied().filter(|p| *p != p0).collect();

        // 2. Sort remaining points by polar angle with p0. If angles are equal, closer first.
        local_points.sort_by(|pa, pb| {
            let orientation = Point::counter_clockwise(p0, *pa, *pb);
            if orientation.abs() < self.tolerance {
                p0.distance_squared_to(*pa)
                    .partial_cmp(&p0.distance_squared_to(*pb))
                    .unwrap_or(Ordering::Equal)
            } else if orientation > 0.0 {
                // pa is CW of pb as seen from p0, so it comes first
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });

        // 3. Build the hull using a stack.
        let mut hull: Vec<Point> = Vec::with_capacity(local_points.len() + 1);
        hull.push(p0);
        for next in local_points {
            // Pop while (second last, last, next) is not a strict left turn.
            while hull.len() >= 2
                && Point::counter_clockwise(hull[hull.len() - 2], hull[hull.len() - 1], next)
                    <= self.tolerance
            {
                hull.pop();
            }
            hull.push(next);
        }
        hull
    }

    /// Implements Andrew's Monotone Chain algorithm.
    fn andrew_monotone(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        });
        points.dedup();

        let n = points.len();
        if n < 3 {
            return points;
        }

        let mut hull: Vec<Point> = Vec::with_capacity(2 * n);

        // Build lower hull
        for &p_i in &points {
            while hull.len() >= 2
                && Point::counter_clockwise(hull[hull.len() - 2], hull[hull.len() - 1], p_i)
                    <= self.tolerance
            {
                hull.pop();
            }
            hull.push(p_i);
        }

        // Build upper hull (iterate in reverse, excluding the last point added to lower hull)
        let t = hull.len() + 1;
        for &p_i in points.iter().rev().skip(1) {
            while hull.len() >= t
                && Point::counter_clockwise(hull[hull.len() - 2], hull[hull.len() - 1], p_i)
                    <= self.tolerance
            {
                hull.pop();
            }
            hull.push(p_i);
        }

        // The last point pushed for the upper hull is points[0], the start of the lower hull.
        hull.pop();
        hull
    }
}
