use serde::{Deserialize, Serialize};

/// Identifier for a particle in a [`crate::particle::ParticleSet`].
///
/// This is an index into `ParticleSet::particles`, and is only meaningful
/// until the next reset of the set.
pub type ParticleId = usize;

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const VIOLET: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);
    pub const CYAN: Rgb = Rgb::new(0x06, 0xb6, 0xd4);
    pub const MAGENTA: Rgb = Rgb::new(0xd9, 0x46, 0xef);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pairs this color with an alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba::new(self, alpha)
    }
}

/// An RGB color with a straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { rgb, alpha }
    }

    pub fn transparent(rgb: Rgb) -> Self {
        Self { rgb, alpha: 0.0 }
    }

    /// Alpha as an 8-bit channel value.
    pub fn alpha_u8(&self) -> u8 {
        (self.alpha * 255.0).round() as u8
    }
}
