// src/math/types/rect.rs

use crate::math::{error::*, types::Point};
use std::fmt;

/// Achsenparalleles Rechteck (Ursprung = untere linke Ecke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Erstellt ein neues Rechteck
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rechteck am Ursprung mit gegebener Größe. Rejects non-positive sizes.
    pub fn from_size(width: f64, height: f64) -> MathResult<Self> {
        if !(width > 0.0) {
            return Err(MathError::out_of_range("width", "greater than 0", width));
        }
        if !(height > 0.0) {
            return Err(MathError::out_of_range("height", "greater than 0", height));
        }
        Ok(Self::new(0.0, 0.0, width, height))
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Zentrum des Rechtecks
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Fläche des Rechtecks
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Ecken gegen den Uhrzeigersinn, beginnend bei `min()`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x_max(), self.y),
            Point::new(self.x_max(), self.y_max()),
            Point::new(self.x, self.y_max()),
        ]
    }

    /// Prüft ob ein Punkt im Rechteck liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.x_max() && point.y >= self.y && point.y <= self.y_max()
    }

    /// `true` if the interiors overlap; shared borders do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(x: {}, y: {}, width: {}, height: {})",
            self.x, self.y, self.width, self.height
        )
    }
}
