// src/math/algorithms/perpendicular_filter.rs

//! # Perpendicular Point Filter
//!
//! Keeps the candidates that lie "ahead" of a target when it is approached
//! from a previous point. The boundary is the line through the target
//! perpendicular to the approach; points on that line are kept.

use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::comparison,
};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct PerpendicularFilter {
    target: Point,
    previous: Point,
    candidates: Vec<Point>,
    excluded: HashSet<Point>,
}

impl PerpendicularFilter {
    pub fn new(target: Point, previous: Point) -> Self {
        Self {
            target,
            previous,
            candidates: Vec::new(),
            excluded: HashSet::new(),
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<Point>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Points that are never returned, whichever side they are on.
    pub fn with_excluded<I>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        self.excluded = excluded.into_iter().collect();
        self
    }

    /// Eligible candidates in input order. An empty result means no
    /// candidate lies ahead of the target.
    pub fn run(&self) -> MathResult<Vec<Point>> {
        if self.target == self.previous {
            return Err(MathError::invalid_argument("PerpendicularFilter", "previous"));
        }

        Ok(self
            .candidates
            .iter()
            .copied()
            .filter(|p| !self.excluded.contains(p) && self.is_ahead(*p))
            .collect())
    }

    fn is_ahead(&self, point: Point) -> bool {
        let dx = self.target.x - self.previous.x;
        let dy = self.target.y - self.previous.y;

        if comparison::nearly_zero(dx) {
            // Senkrechte Annäherung: nur die y-Koordinate zählt
            return if dy > 0.0 {
                point.y >= self.target.y
            } else {
                point.y <= self.target.y
            };
        }
        if comparison::nearly_zero(dy) {
            return if dx > 0.0 {
                point.x >= self.target.x
            } else {
                point.x <= self.target.x
            };
        }

        // Lotgerade durch das Ziel: y = target.y + k * (x - target.x), k = -1/m
        let slope = -dx / dy;
        let offset = |p: Point| p.y - (self.target.y + slope * (p.x - self.target.x));

        let side = offset(point);
        if comparison::nearly_zero(side) {
            return true;
        }
        comparison::sign(side) != comparison::sign(offset(self.previous))
    }
}
