use crate::config::FieldConfig;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The 2-D drawing area particles live on, in surface pixels.
///
/// The origin is the top-left corner and `y` grows downward, matching
/// how hosts report pointer positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` if the surface has no usable area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn area(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// Number of particles a field of this size holds:
    /// `min(max_particles, floor(area / area_per_particle))`.
    pub fn particle_count(&self, cfg: &FieldConfig) -> usize {
        let by_area = (self.area() / cfg.area_per_particle).floor();
        if by_area.is_finite() && by_area > 0.0 {
            (by_area as usize).min(cfg.max_particles)
        } else {
            0
        }
    }

    /// `true` if `pos` lies in `[0, width] × [0, height]`.
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    /// Toroidal wraparound: a coordinate below `0` jumps to the far edge,
    /// one beyond the far edge jumps to `0`.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}
