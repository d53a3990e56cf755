//! Draw passes for one frame.
//!
//! A frame is painted back to front:
//! 1. [`pointer_glow_pass`] — a large soft gradient under the pointer.
//! 2. [`particle_pass`] — per particle, a soft glow and then its core.
//! 3. [`connection_pass`] — lines between nearby pairs, more opaque and
//!    thicker the closer the pair.

use crate::{
    canvas::{Canvas, GradientStop},
    config::FieldConfig,
    connections::Connection,
    input::PointerState,
    particle::ParticleSet,
    types::Rgba,
};

/// Paints the pointer gradient if the pointer is over the surface.
///
/// ### Parameters
/// - `pointer` - Current pointer state; nothing is drawn while inactive.
/// - `cfg` - Supplies `pointer_glow_radius` and `pointer_glow_stops`.
/// - `canvas` - Target surface.
pub fn pointer_glow_pass(pointer: &PointerState, cfg: &FieldConfig, canvas: &mut impl Canvas) {
    if let Some(center) = pointer.active_pos() {
        canvas.fill_radial_gradient(center, cfg.pointer_glow_radius, &cfg.pointer_glow_stops);
    }
}

/// Paints each particle as a radial glow of radius `size * glow_scale`
/// followed by a core circle of radius `size`.
///
/// The glow center alpha is `glow_alpha * opacity` and fades to
/// transparent. The core uses the particle color at `opacity`.
///
/// ### Parameters
/// - `set` - Particles, drawn in index order.
/// - `cfg` - Supplies `glow_alpha` and `glow_scale`.
/// - `canvas` - Target surface.
pub fn particle_pass(set: &ParticleSet, cfg: &FieldConfig, canvas: &mut impl Canvas) {
    for p in &set.particles {
        let size = p.size.max(0.0);
        let stops = [
            GradientStop::new(0.0, p.color.with_alpha(cfg.glow_alpha * p.opacity)),
            GradientStop::new(1.0, Rgba::transparent(p.color)),
        ];
        canvas.fill_radial_gradient(p.pos, size * cfg.glow_scale, &stops);
        canvas.fill_circle(p.pos, size, p.color.with_alpha(p.opacity));
    }
}

/// Strokes one line per connection.
///
/// With `closeness = 1 - distance / connect_distance`:
/// - `alpha = closeness * connection_opacity`
/// - `width = connection_width + closeness * connection_width_boost`
///
/// ### Parameters
/// - `set` - Particles the connection indices refer to.
/// - `connections` - Pairs from [`crate::connections`], each drawn once.
/// - `cfg` - Line color, widths and glow.
/// - `canvas` - Target surface.
pub fn connection_pass(
    set: &ParticleSet,
    connections: &[Connection],
    cfg: &FieldConfig,
    canvas: &mut impl Canvas,
) {
    for c in connections {
        let closeness = c.closeness(cfg.connect_distance);
        let color = cfg
            .connection_color
            .with_alpha(closeness * cfg.connection_opacity);
        let width = cfg.connection_width + closeness * cfg.connection_width_boost;
        canvas.stroke_line(
            set.particles[c.a].pos,
            set.particles[c.b].pos,
            width,
            color,
            cfg.connection_glow,
        );
    }
}
