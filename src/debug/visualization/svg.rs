// src/debug/visualization/svg.rs
use super::sink::{Color, DebugSink};
use crate::math::types::{Circle as MathCircle, Edge, Point, Rect};
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon, Rectangle};
use tracing::info;

// ===================================================================================
// 1. AUFGEZEICHNETE FORMEN
// ===================================================================================
#[derive(Debug, Clone)]
enum Shape {
    Rect(Rect),
    Point(Point),
    Edges(Vec<Edge>),
    Circle(MathCircle),
    Polygon(Vec<Point>),
}

impl Shape {
    /// Punkte, die die Bounding Box der Form bestimmen.
    fn extent_points(&self) -> Vec<Point> {
        match self {
            Shape::Rect(rect) => vec![rect.min(), rect.max()],
            Shape::Point(point) => vec![*point],
            Shape::Edges(edges) => edges.iter().flat_map(|e| [e.start, e.end]).collect(),
            Shape::Circle(circle) => {
                let r = Point::new(circle.radius, circle.radius);
                vec![circle.center - r, circle.center + r]
            }
            Shape::Polygon(outline) => outline.clone(),
        }
    }
}

// ===================================================================================
// 2. SVG-SINK
// ===================================================================================
/// Collects debug drawings and renders them into a single SVG document.
///
/// Stroke widths and point radii are relative to the extent of everything
/// drawn, so the picture reads the same at any map size. The y axis points
/// up like in the layout. Durations are ignored.
#[derive(Debug, Clone)]
pub struct SvgSink {
    shapes: Vec<(Shape, Color)>,
    pixel_size: u32,
}

impl Default for SvgSink {
    fn default() -> Self {
        Self::new(800)
    }
}

impl SvgSink {
    pub fn new(pixel_size: u32) -> Self {
        Self {
            shapes: Vec::new(),
            pixel_size,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.shapes.iter().flat_map(|(shape, _)| shape.extent_points());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    pub fn to_document(&self) -> Document {
        let (min, max) = self
            .bounds()
            .unwrap_or((Point::ZERO, Point::new(1.0, 1.0)));
        let width = (max.x - min.x).max(1.0);
        let height = (max.y - min.y).max(1.0);
        let extent = (width + height) / 2.0;
        let margin = extent * 0.05;
        let stroke_width = extent * 0.004;
        let point_radius = extent * 0.01;

        let mut group = Group::new().set("transform", "scale(1,-1)");
        for (shape, color) in &self.shapes {
            let stroke = color.to_hex();
            let opacity = color.opacity();
            match shape {
                Shape::Rect(rect) => {
                    group = group.add(
                        Rectangle::new()
                            .set("x", rect.x)
                            .set("y", rect.y)
                            .set("width", rect.width)
                            .set("height", rect.height)
                            .set("fill", "none")
                            .set("stroke", stroke)
                            .set("stroke-opacity", opacity)
                            .set("stroke-width", stroke_width),
                    );
                }
                Shape::Point(point) => {
                    group = group.add(
                        Circle::new()
                            .set("cx", point.x)
                            .set("cy", point.y)
                            .set("r", point_radius)
                            .set("fill", stroke)
                            .set("fill-opacity", opacity),
                    );
                }
                Shape::Edges(edges) => {
                    for edge in edges {
                        group = group.add(
                            Line::new()
                                .set("x1", edge.start.x)
                                .set("y1", edge.start.y)
                                .set("x2", edge.end.x)
                                .set("y2", edge.end.y)
                                .set("stroke", stroke.clone())
                                .set("stroke-opacity", opacity)
                                .set("stroke-width", stroke_width),
                        );
                    }
                }
                Shape::Circle(circle) => {
                    group = group.add(
                        Circle::new()
                            .set("cx", circle.center.x)
                            .set("cy", circle.center.y)
                            .set("r", circle.radius)
                            .set("fill", "none")
                            .set("stroke", stroke)
                            .set("stroke-opacity", opacity)
                            .set("stroke-width", stroke_width),
                    );
                }
                Shape::Polygon(outline) => {
                    let points = outline
                        .iter()
                        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    group = group.add(
                        Polygon::new()
                            .set("points", points)
                            .set("fill", "none")
                            .set("stroke", stroke)
                            .set("stroke-opacity", opacity)
                            .set("stroke-width", stroke_width),
                    );
                }
            }
        }

        // Die Gruppe ist an der x-Achse gespiegelt, daher die negative y-Koordinate
        Document::new()
            .set("width", self.pixel_size)
            .set("height", self.pixel_size)
            .set(
                "viewBox",
                (
                    min.x - margin,
                    -(max.y + margin),
                    width + 2.0 * margin,
                    height + 2.0 * margin,
                ),
            )
            .add(group)
    }

    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        svg::save(path.as_ref(), &self.to_document())?;
        info!(
            "Debug SVG '{}' wurde erstellt ({} Formen).",
            path.as_ref().display(),
            self.shapes.len()
        );
        Ok(())
    }
}

impl DebugSink for SvgSink {
    fn draw_rect(&mut self, rect: &Rect, color: Color, _duration: Option<f64>) {
        self.shapes.push((Shape::Rect(*rect), color));
    }

    fn draw_point(&mut self, point: Point, color: Color, _duration: Option<f64>) {
        self.shapes.push((Shape::Point(point), color));
    }

    fn draw_edges(&mut self, edges: &[Edge], color: Color, _duration: Option<f64>) {
        if edges.is_empty() {
            return;
        }
        self.shapes.push((Shape::Edges(edges.to_vec()), color));
    }

    fn draw_circle(&mut self, circle: &MathCircle, color: Color, _duration: Option<f64>) {
        self.shapes.push((Shape::Circle(*circle), color));
    }

    fn draw_polygon(&mut self, outline: &[Point], color: Color, _duration: Option<f64>) {
        if outline.len() < 2 {
            return;
        }
        self.shapes.push((Shape::Polygon(outline.to_vec()), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sink_renders_document() {
        let sink = SvgSink::default();
        assert!(sink.is_empty());
        let svg = sink.to_svg_string();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox"));
    }

    #[test]
    fn test_shapes_are_rendered() {
        let mut sink = SvgSink::new(400);
        sink.draw_rect(&Rect::new(0.0, 0.0, 10.0, 5.0), Color::GREEN, None);
        sink.draw_point(Point::new(2.0, 2.0), Color::RED, Some(1.0));
        sink.draw_edges(
            &[
                Edge::new(Point::ZERO, Point::new(10.0, 5.0)),
                Edge::new(Point::ZERO, Point::new(0.0, 5.0)),
            ],
            Color::BLUE,
            None,
        );
        sink.draw_circle(&MathCircle::new(Point::new(5.0, 2.5), 1.0), Color::GRAY, None);
        sink.draw_polygon(
            &[Point::ZERO, Point::new(10.0, 0.0), Point::new(10.0, 5.0)],
            Color::MAGENTA,
            None,
        );
        // Leere Kantenliste wird ignoriert
        sink.draw_edges(&[], Color::BLUE, None);
        assert_eq!(sink.len(), 5);

        let svg = sink.to_svg_string();
        assert!(svg.contains("<rect"));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("#ff00ff"));
        assert!(svg.contains("scale(1,-1)"));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_save_writes_file() {
        let mut sink = SvgSink::default();
        sink.draw_point(Point::new(1.0, 1.0), Color::GREEN, None);
        let path = std::env::temp_dir().join("dungeon_layout_svg_sink_test.svg");
        sink.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<circle"));
        std::fs::remove_file(&path).unwrap();
    }
}
