//! [`Canvas`] implementation on top of an [`egui::Painter`].
//!
//! egui has no radial gradient primitive, so gradients are tessellated
//! into vertex-colored ring meshes; egui interpolates colors across each
//! triangle, which gives a smooth falloff between stops.

use field_core::{
    canvas::{Canvas, GradientStop},
    surface::Surface,
    types::Rgba,
};
use glam::Vec2;
use std::f32::consts::TAU;

/// Segments per full circle when tessellating a gradient.
const GRADIENT_SEGMENTS: u32 = 48;

/// Fraction of a line's alpha used for its glow underlay.
const GLOW_ALPHA: f32 = 0.35;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x0a, 0x0a, 0x0f);

pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.rgb.r, c.rgb.g, c.rgb.b, c.alpha_u8())
}

/// Builds a triangle mesh for a radial gradient.
///
/// Each pair of consecutive stops becomes one ring from
/// `offset_i * radius` to `offset_{i+1} * radius`, colored by the two
/// stops. A stop at offset `0` makes the innermost ring a filled disc.
pub fn gradient_mesh(center: egui::Pos2, radius: f32, stops: &[GradientStop]) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    if !(radius > 0.0) {
        return mesh;
    }

    for pair in stops.windows(2) {
        let (inner, outer) = (&pair[0], &pair[1]);
        let (r0, r1) = (inner.offset * radius, outer.offset * radius);
        let (c0, c1) = (to_color32(inner.color), to_color32(outer.color));

        let base = mesh.vertices.len() as u32;
        for i in 0..=GRADIENT_SEGMENTS {
            let angle = i as f32 / GRADIENT_SEGMENTS as f32 * TAU;
            let dir = egui::vec2(angle.cos(), angle.sin());
            mesh.colored_vertex(center + dir * r0, c0);
            mesh.colored_vertex(center + dir * r1, c1);
        }
        for i in 0..GRADIENT_SEGMENTS {
            let k = base + 2 * i;
            mesh.add_triangle(k, k + 1, k + 3);
            mesh.add_triangle(k, k + 3, k + 2);
        }
    }
    mesh
}

/// Shapes for one stroked line: a wider low-alpha underlay when `glow > 0`,
/// then the line itself.
pub fn line_shapes(
    points: [egui::Pos2; 2],
    width: f32,
    color: Rgba,
    glow: f32,
) -> Vec<egui::Shape> {
    let mut shapes = Vec::with_capacity(2);
    if glow > 0.0 {
        let halo = Rgba::new(color.rgb, color.alpha * GLOW_ALPHA);
        shapes.push(egui::Shape::line_segment(
            points,
            egui::Stroke::new(width + glow, to_color32(halo)),
        ));
    }
    shapes.push(egui::Shape::line_segment(
        points,
        egui::Stroke::new(width, to_color32(color)),
    ));
    shapes
}

pub fn circle_shape(center: egui::Pos2, radius: f32, color: Rgba) -> egui::Shape {
    egui::Shape::circle_filled(center, radius, to_color32(color))
}

/// Paints field primitives into a screen rectangle whose top-left corner
/// is surface coordinate `(0, 0)`.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, surface: Surface) {
        let rect =
            egui::Rect::from_min_size(self.origin, egui::vec2(surface.width, surface.height));
        self.painter.rect_filled(rect, 0.0, BACKGROUND);
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let mesh = gradient_mesh(self.to_screen(center), radius, stops);
        if !mesh.is_empty() {
            self.painter.add(egui::Shape::mesh(mesh));
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .add(circle_shape(self.to_screen(center), radius, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, glow: f32) {
        let points = [self.to_screen(from), self.to_screen(to)];
        self.painter.extend(line_shapes(points, width, color, glow));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_core::types::Rgb;

    #[test]
    fn color_conversion_keeps_channels() {
        let c = to_color32(Rgb::VIOLET.with_alpha(1.0));
        assert_eq!(c, egui::Color32::from_rgb(139, 92, 246));

        let clear = to_color32(Rgba::transparent(Rgb::CYAN));
        assert_eq!(clear.a(), 0);
    }

    #[test]
    fn gradient_mesh_has_one_ring_per_stop_pair() {
        let stops = [
            GradientStop::new(0.0, Rgb::VIOLET.with_alpha(0.15)),
            GradientStop::new(0.5, Rgb::CYAN.with_alpha(0.08)),
            GradientStop::new(1.0, Rgba::transparent(Rgb::CYAN)),
        ];
        let mesh = gradient_mesh(egui::pos2(100.0, 100.0), 150.0, &stops);

        let rings = 2;
        assert_eq!(mesh.vertices.len() as u32, rings * (GRADIENT_SEGMENTS + 1) * 2);
        assert_eq!(mesh.indices.len() as u32, rings * GRADIENT_SEGMENTS * 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn gradient_mesh_reaches_outer_radius() {
        let stops = [
            GradientStop::new(0.0, Rgb::MAGENTA.with_alpha(0.25)),
            GradientStop::new(1.0, Rgba::transparent(Rgb::MAGENTA)),
        ];
        let center = egui::pos2(10.0, 20.0);
        let mesh = gradient_mesh(center, 6.0, &stops);

        let max_r = mesh
            .vertices
            .iter()
            .map(|v| (v.pos - center).length())
            .fold(0.0f32, f32::max);
        assert!((max_r - 6.0).abs() < 1e-3);
        // Inner vertices sit on the center for a stop at offset 0.
        assert!((mesh.vertices[0].pos - center).length() < 1e-6);
    }

    #[test]
    fn degenerate_gradients_produce_no_mesh() {
        let stops = [
            GradientStop::new(0.0, Rgb::CYAN.with_alpha(0.5)),
            GradientStop::new(1.0, Rgba::transparent(Rgb::CYAN)),
        ];
        assert!(gradient_mesh(egui::Pos2::ZERO, 0.0, &stops).is_empty());
        assert!(gradient_mesh(egui::Pos2::ZERO, 10.0, &stops[..1]).is_empty());
    }

    #[test]
    fn glowing_line_is_underlay_then_line() {
        let points = [egui::pos2(0.0, 0.0), egui::pos2(30.0, 40.0)];
        let color = Rgb::VIOLET.with_alpha(0.4);
        let shapes = line_shapes(points, 2.0, color, 5.0);

        assert_eq!(shapes.len(), 2);
        match (&shapes[0], &shapes[1]) {
            (
                egui::Shape::LineSegment { points: p0, stroke: halo },
                egui::Shape::LineSegment { points: p1, stroke: line },
            ) => {
                assert_eq!(*p0, points);
                assert_eq!(*p1, points);
                assert_eq!(halo.width, 7.0);
                assert_eq!(line.width, 2.0);
                assert!(halo.color.a() < line.color.a());
                assert_eq!(line.color, to_color32(color));
            }
            other => panic!("expected two line segments, got {other:?}"),
        }
    }

    #[test]
    fn line_without_glow_is_one_segment() {
        let points = [egui::pos2(1.0, 1.0), egui::pos2(2.0, 2.0)];
        let shapes = line_shapes(points, 1.0, Rgb::VIOLET.with_alpha(1.0), 0.0);
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], egui::Shape::LineSegment { .. }));
    }

    #[test]
    fn filled_circle_is_one_circle_shape() {
        let color = Rgb::CYAN.with_alpha(0.5);
        match circle_shape(egui::pos2(5.0, 6.0), 3.0, color) {
            egui::Shape::Circle(c) => {
                assert_eq!(c.center, egui::pos2(5.0, 6.0));
                assert_eq!(c.radius, 3.0);
                assert_eq!(c.fill, to_color32(color));
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }
}
