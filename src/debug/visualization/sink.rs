// src/debug/visualization/sink.rs
use crate::math::types::{Circle, Edge, Point, Rect};

/// RGBA-Farbe für Debug-Zeichnungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 235, 4);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha is not included.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// Receiver for debug geometry.
///
/// `duration` is the number of seconds a drawing should stay visible;
/// `None` means until cleared. Sinks that produce static output may ignore
/// it.
pub trait DebugSink {
    fn draw_rect(&mut self, rect: &Rect, color: Color, duration: Option<f64>);

    fn draw_point(&mut self, point: Point, color: Color, duration: Option<f64>);

    fn draw_points(&mut self, points: &[Point], color: Color, duration: Option<f64>) {
        for &point in points {
            self.draw_point(point, color, duration);
        }
    }

    fn draw_edges(&mut self, edges: &[Edge], color: Color, duration: Option<f64>);

    fn draw_circle(&mut self, circle: &Circle, color: Color, duration: Option<f64>);

    /// Closed outline through `outline` in the given order.
    fn draw_polygon(&mut self, outline: &[Point], color: Color, duration: Option<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        points: usize,
    }

    impl DebugSink for CountingSink {
        fn draw_rect(&mut self, _: &Rect, _: Color, _: Option<f64>) {}
        fn draw_point(&mut self, _: Point, _: Color, _: Option<f64>) {
            self.points += 1;
        }
        fn draw_edges(&mut self, _: &[Edge], _: Color, _: Option<f64>) {}
        fn draw_circle(&mut self, _: &Circle, _: Color, _: Option<f64>) {}
        fn draw_polygon(&mut self, _: &[Point], _: Color, _: Option<f64>) {}
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::MAGENTA.to_hex(), "#ff00ff");
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::RED.with_alpha(0).opacity(), 0.0);
        assert_eq!(Color::RED.opacity(), 1.0);
    }

    #[test]
    fn test_draw_points_defaults_to_single_points() {
        let mut sink = CountingSink::default();
        sink.draw_points(&[Point::ZERO, Point::new(1.0, 1.0)], Color::GREEN, None);
        assert_eq!(sink.points, 2);
    }
}
