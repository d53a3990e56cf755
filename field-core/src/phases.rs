//! Per-frame update passes for the particle field.
//!
//! One update runs, in order:
//! 1. [`motion_phase`] — every particle moves by its constant velocity.
//! 2. [`pulse_phase`] — size and opacity are rederived from the base
//!    values and the time-driven oscillation.
//! 3. [`pointer_phase`] — particles near an active pointer are pulled
//!    toward it and glow brighter.
//! 4. [`wrap_phase`] — particles that left the surface reappear on the
//!    opposite edge.
//!
//! Each pass only touches one particle at a time, so running the passes
//! over the whole set is equivalent to running all four steps per particle.

use crate::{
    config::FieldConfig, input::PointerState, particle::ParticleSet, surface::Surface,
};

/// Moves every particle by its constant velocity: `pos += vel`.
pub fn motion_phase(set: &mut ParticleSet) {
    for p in &mut set.particles {
        p.pos += p.vel;
    }
}

/// Recomputes `size` and `opacity` at virtual time `t`:
///
/// - `size = base_size + size_amplitude * sin(t * rate + phase)`
/// - `opacity = base_opacity + opacity_amplitude * sin(t * rate + phase)`
///
/// Opacity is clamped to `[0, 1]`.
pub fn pulse_phase(set: &mut ParticleSet, cfg: &FieldConfig, t: f64) {
    for p in &mut set.particles {
        let s = p.pulse(t);
        p.size = p.base_size + s * cfg.size_amplitude;
        p.opacity = (p.base_opacity + s * cfg.opacity_amplitude).clamp(0.0, 1.0);
    }
}

/// Pulls particles within `cfg.pointer_radius` of an active pointer.
///
/// For a particle at distance `d`, with `force = (radius - d) / radius`:
///
/// 1. `pos += (pointer - pos) * force * attraction_strength`
/// 2. `opacity = min(1, opacity + force * pointer_opacity_boost)`
/// 3. `size = base_size + force * pointer_size_boost`
///
/// Does nothing while the pointer is inactive.
pub fn pointer_phase(set: &mut ParticleSet, pointer: &PointerState, cfg: &FieldConfig) {
    let Some(target) = pointer.active_pos() else {
        return;
    };
    let radius = cfg.pointer_radius;

    for p in &mut set.particles {
        let delta = target - p.pos;
        let d = delta.length();
        if d >= radius {
            continue;
        }

        let force = (radius - d) / radius;
        p.pos += delta * force * cfg.attraction_strength;
        p.opacity = (p.opacity + force * cfg.pointer_opacity_boost).min(1.0);
        p.size = p.base_size + force * cfg.pointer_size_boost;
    }
}

/// Wraps particles that left the surface to the opposite edge.
///
/// Per axis, `x < 0` becomes `width` and `x > width` becomes `0`. A
/// particle is never clamped, so it keeps its velocity through the wrap.
///
/// ### Parameters
/// - `set` - Particles after motion and pointer pull.
/// - `surface` - Bounds to wrap against.
pub fn wrap_phase(set: &mut ParticleSet, surface: &Surface) {
    for p in &mut set.particles {
        p.pos = surface.wrap(p.pos);
    }
}

/// Runs all four passes for one frame at virtual time `t`.
pub fn update(
    set: &mut ParticleSet,
    pointer: &PointerState,
    surface: &Surface,
    cfg: &FieldConfig,
    t: f64,
) {
    motion_phase(set);
    pulse_phase(set, cfg, t);
    pointer_phase(set, pointer, cfg);
    wrap_phase(set, surface);
}
