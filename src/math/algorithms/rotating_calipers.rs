// src/math/algorithms/rotating_calipers.rs

//! # Rotating Calipers
//!
//! Finds the diameter of a convex polygon, i.e. the pair of vertices with
//! the largest distance. The polygon is expected in hull order (CCW, as
//! returned by [`ConvexHull`](super::convex_hull::ConvexHull)).

use crate::math::{
    error::{MathError, MathResult},
    types::{Edge, Point},
    utils::constants,
};
use tracing::debug;

/// Das am weitesten entfernte Punktpaar eines konvexen Polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaliperPair {
    pub p1: Point,
    pub p2: Point,
    pub distance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RotatingCalipers {
    hull: Vec<Point>,
}

impl RotatingCalipers {
    pub fn new(hull: Vec<Point>) -> Self {
        Self { hull }
    }

    pub fn with_hull(mut self, hull: Vec<Point>) -> Self {
        self.hull = hull;
        self
    }

    pub fn run(&self) -> MathResult<CaliperPair> {
        let hull = &self.hull;
        let n = hull.len();
        match n {
            0 => return Err(MathError::invalid_argument("RotatingCalipers", "hull")),
            1 => {
                return Ok(CaliperPair {
                    p1: hull[0],
                    p2: hull[0],
                    distance: 0.0,
                });
            }
            _ => {}
        }

        let mut best = CaliperPair {
            p1: hull[0],
            p2: hull[1],
            distance: hull[0].distance_to(hull[1]),
        };
        let mut consider = |a: Point, b: Point| {
            let distance = a.distance_to(b);
            if distance > best.distance {
                best = CaliperPair {
                    p1: a,
                    p2: b,
                    distance,
                };
            }
        };

        let mut top = 1;
        for i in 0..n {
            let floor = Edge::new(hull[i], hull[(i + 1) % n]);

            // Oberen Messschieber vorrücken, solange die Kante noch nach links dreht
            let mut steps = 0;
            while steps < n
                && connected_counter_clockwise(&floor, &Edge::new(hull[top], hull[(top + 1) % n]))
            {
                top = (top + 1) % n;
                steps += 1;
            }

            consider(floor.start, hull[top]);
            consider(floor.end, hull[top]);
        }

        debug!(
            "RotatingCalipers: diameter {} between {} and {}",
            best.distance, best.p1, best.p2
        );
        Ok(best)
    }
}

/// Translates `top` so that it starts at the end of `floor` and reports
/// whether the joined path turns counter-clockwise.
fn connected_counter_clockwise(floor: &Edge, top: &Edge) -> bool {
    let endpoint = top.end - (top.start - floor.end);
    Point::counter_clockwise(floor.start, floor.end, endpoint) > constants::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::algorithms::convex_hull::ConvexHull;
    use crate::math::probability::SeedResource;
    use approx::assert_relative_eq;

    fn brute_force_diameter(points: &[Point]) -> f64 {
        let mut best: f64 = 0.0;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                best = best.max(a.distance_to(*b));
            }
        }
        best
    }

    #[test]
    fn test_unit_square_diameter() {
        let hull = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let pair = RotatingCalipers::new(hull).run().unwrap();
        assert_relative_eq!(pair.distance, constants::SQRT_2);
        assert_relative_eq!(pair.p1.distance_to(pair.p2), constants::SQRT_2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(
            RotatingCalipers::new(Vec::new()).run().unwrap_err(),
            MathError::invalid_argument("RotatingCalipers", "hull")
        );

        let single = RotatingCalipers::new(vec![Point::new(3.0, 4.0)]).run().unwrap();
        assert_eq!(single.p1, single.p2);
        assert_eq!(single.distance, 0.0);

        let pair = RotatingCalipers::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)])
            .run()
            .unwrap();
        assert_relative_eq!(pair.distance, 5.0);
    }

    #[test]
    fn test_matches_brute_force_on_random_hulls() {
        let mut seed_resource = SeedResource::from_seed(77);
        for _ in 0..10 {
            let points: Vec<Point> = (0..30)
                .map(|_| {
                    Point::new(
                        seed_resource.next_f64_in_inclusive_range(0.0, 50.0),
                        seed_resource.next_f64_in_inclusive_range(0.0, 20.0),
                    )
                })
                .collect();
            let hull = ConvexHull::new(points.clone()).run().unwrap();
            let pair = RotatingCalipers::new(hull).run().unwrap();
            assert_relative_eq!(pair.distance, brute_force_diameter(&points), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pair_are_hull_vertices() {
        let hull = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(1.0, 3.0),
        ];
        let pair = RotatingCalipers::new(hull.clone()).run().unwrap();
        assert!(hull.contains(&pair.p1));
        assert!(hull.contains(&pair.p2));
        assert_relative_eq!(pair.distance, 29.0_f64.sqrt());
    }
}
