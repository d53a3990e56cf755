//! Drawing-surface abstraction.
//!
//! The field never talks to a concrete renderer. It issues the four
//! primitives of [`Canvas`], which a host maps onto its own painter.
//! [`DrawList`] is an in-memory canvas that simply records the calls.

use crate::{surface::Surface, types::Rgba};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A color stop of a radial gradient, `offset` running from the center
/// (`0.0`) to the rim (`1.0`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// The primitives the field renders with.
pub trait Canvas {
    /// Erases the whole surface.
    fn clear(&mut self, surface: Surface);

    /// Fills a disc of `radius` around `center` with a radial gradient.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Fills a solid disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Strokes a straight line. `glow` is a blur radius in pixels; `0`
    /// means a plain stroke.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, glow: f32);
}

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Surface),
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
        glow: f32,
    },
}

/// A [`Canvas`] that records every call in order.
///
/// [`Canvas::clear`] drops everything recorded so far, so a list reused
/// across frames only ever holds the latest frame.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn gradients(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::RadialGradient { .. }))
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, surface: Surface) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(surface));
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, glow: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
            glow,
        });
    }
}
