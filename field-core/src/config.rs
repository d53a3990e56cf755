//! Tunable constants for spawning, motion and rendering.
//!
//! [`FieldConfig::default`] reproduces the stock look of the field. Every
//! field is `#[serde(default)]`, so a config file only needs to list the
//! values it overrides.

use crate::{
    canvas::GradientStop,
    error::ConfigError,
    types::{Rgb, Rgba},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Inclusive `[min, max]` interval a random attribute is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        (self.min..=self.max).contains(&v)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NotFinite { field });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(ConfigError::RangeTooWide { field });
        }
        Ok(())
    }
}

/// One palette color and its relative chance of being picked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub weight: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // Population
    pub max_particles: usize,
    pub area_per_particle: f32,

    // Spawn distributions
    pub size_range: ValueRange,
    pub speed_range: ValueRange,
    pub opacity_range: ValueRange,
    pub pulse_rate_range: ValueRange,
    pub palette: Vec<PaletteEntry>,

    // Oscillation
    pub size_amplitude: f32,
    pub opacity_amplitude: f32,

    // Pointer interaction
    pub pointer_radius: f32,
    pub attraction_strength: f32,
    pub pointer_opacity_boost: f32,
    pub pointer_size_boost: f32,

    // Connections
    pub connect_distance: f32,
    pub connection_color: Rgb,
    pub connection_opacity: f32,
    pub connection_width: f32,
    pub connection_width_boost: f32,
    pub connection_glow: f32,
    /// Above this many particles the connection search switches to a
    /// spatial grid.
    pub grid_threshold: usize,

    // Particle and pointer glow
    pub glow_scale: f32,
    pub glow_alpha: f32,
    pub pointer_glow_radius: f32,
    pub pointer_glow_stops: Vec<GradientStop>,

    // Clock
    pub frame_time_step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 150,
            area_per_particle: 10_000.0,

            size_range: ValueRange::new(1.0, 3.5),
            speed_range: ValueRange::new(-0.4, 0.4),
            opacity_range: ValueRange::new(0.3, 0.8),
            pulse_rate_range: ValueRange::new(0.01, 0.03),
            palette: vec![
                PaletteEntry {
                    color: Rgb::VIOLET,
                    weight: 0.4,
                },
                PaletteEntry {
                    color: Rgb::CYAN,
                    weight: 0.3,
                },
                PaletteEntry {
                    color: Rgb::MAGENTA,
                    weight: 0.3,
                },
            ],

            size_amplitude: 0.5,
            opacity_amplitude: 0.15,

            pointer_radius: 200.0,
            attraction_strength: 0.01,
            pointer_opacity_boost: 0.3,
            pointer_size_boost: 2.0,

            connect_distance: 180.0,
            connection_color: Rgb::VIOLET,
            connection_opacity: 0.4,
            connection_width: 1.0,
            connection_width_boost: 1.5,
            connection_glow: 5.0,
            grid_threshold: 256,

            glow_scale: 3.0,
            glow_alpha: 64.0 / 255.0,
            pointer_glow_radius: 150.0,
            pointer_glow_stops: vec![
                GradientStop::new(0.0, Rgba::new(Rgb::VIOLET, 0.15)),
                GradientStop::new(0.5, Rgba::new(Rgb::CYAN, 0.08)),
                GradientStop::new(1.0, Rgba::transparent(Rgb::CYAN)),
            ],

            frame_time_step: 16.0,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NotFinite { field })
    } else if value <= 0.0 {
        Err(ConfigError::NonPositive { field, value })
    } else {
        Ok(())
    }
}

fn positive_f64(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NotFinite { field })
    } else if value <= 0.0 {
        Err(ConfigError::NonPositive {
            field,
            value: value as f32,
        })
    } else {
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NotFinite { field })
    } else if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}

impl FieldConfig {
    /// Parses a (possibly partial) JSON config and validates it.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: FieldConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&text)?;
        log::debug!("loaded field config from {}", path.display());
        Ok(cfg)
    }

    /// Checks that every value is usable by the simulator.
    ///
    /// A validated config guarantees that spawning never draws from an
    /// inverted or overflowing range, that every radius is positive and
    /// that virtual time strictly increases.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        positive("area_per_particle", self.area_per_particle)?;

        self.size_range.validate("size_range")?;
        self.speed_range.validate("speed_range")?;
        self.opacity_range.validate("opacity_range")?;
        self.pulse_rate_range.validate("pulse_rate_range")?;
        non_negative("size_range.min", self.size_range.min)?;
        non_negative("opacity_range.min", self.opacity_range.min)?;

        let mut total_weight = 0.0;
        for entry in &self.palette {
            non_negative("palette.weight", entry.weight)?;
            total_weight += entry.weight;
        }
        if total_weight <= 0.0 {
            return Err(ConfigError::EmptyPalette);
        }

        non_negative("size_amplitude", self.size_amplitude)?;
        non_negative("opacity_amplitude", self.opacity_amplitude)?;

        positive("pointer_radius", self.pointer_radius)?;
        non_negative("attraction_strength", self.attraction_strength)?;
        non_negative("pointer_opacity_boost", self.pointer_opacity_boost)?;
        non_negative("pointer_size_boost", self.pointer_size_boost)?;

        positive("connect_distance", self.connect_distance)?;
        non_negative("connection_opacity", self.connection_opacity)?;
        non_negative("connection_width", self.connection_width)?;
        non_negative("connection_width_boost", self.connection_width_boost)?;
        non_negative("connection_glow", self.connection_glow)?;

        positive("glow_scale", self.glow_scale)?;
        non_negative("glow_alpha", self.glow_alpha)?;
        positive("pointer_glow_radius", self.pointer_glow_radius)?;
        for stop in &self.pointer_glow_stops {
            non_negative("pointer_glow_stops.offset", stop.offset)?;
        }

        positive_f64("frame_time_step", self.frame_time_step)?;
        Ok(())
    }

    /// Picks a palette color from a uniform sample `u` in `[0, 1)`.
    ///
    /// Entries are laid out back to back in proportion to their weights.
    /// Falls back to the last entry if rounding pushes `u` past the end.
    pub fn pick_color(&self, u: f32) -> Rgb {
        let total: f32 = self.palette.iter().map(|e| e.weight).sum();
        let mut target = u * total;
        for entry in &self.palette {
            if target < entry.weight {
                return entry.color;
            }
            target -= entry.weight;
        }
        self.palette.last().map_or(Rgb::VIOLET, |e| e.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_particles() {
        let cfg = FieldConfig {
            max_particles: 0,
            ..FieldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroParticles)));
    }

    #[test]
    fn validate_rejects_non_positive_radius() {
        let cfg = FieldConfig {
            connect_distance: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "connect_distance",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let cfg = FieldConfig {
            size_range: ValueRange::new(3.0, 1.0),
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRange {
                field: "size_range",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_range_wider_than_f32() {
        let err =
            FieldConfig::from_json_str(r#"{ "speed_range": { "min": -3e38, "max": 3e38 } }"#)
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RangeTooWide {
                field: "speed_range"
            }
        ));
    }

    #[test]
    fn validate_rejects_non_positive_time_step() {
        for step in [0.0, -16.0] {
            let cfg = FieldConfig {
                frame_time_step: step,
                ..FieldConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::NonPositive {
                    field: "frame_time_step",
                    ..
                })
            ));
        }

        let cfg = FieldConfig {
            frame_time_step: f64::INFINITY,
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "frame_time_step"
            })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let cfg = FieldConfig {
            pointer_radius: f32::NAN,
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "pointer_radius"
            })
        ));
    }

    #[test]
    fn validate_rejects_empty_palette() {
        let cfg = FieldConfig {
            palette: Vec::new(),
            ..FieldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPalette)));

        let cfg = FieldConfig {
            palette: vec![PaletteEntry {
                color: Rgb::CYAN,
                weight: 0.0,
            }],
            ..FieldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg = FieldConfig::from_json_str(r#"{ "max_particles": 40, "connect_distance": 90.0 }"#)
            .unwrap();
        assert_eq!(cfg.max_particles, 40);
        assert_eq!(cfg.connect_distance, 90.0);
        assert_eq!(cfg.pointer_radius, 200.0);
        assert_eq!(cfg.palette.len(), 3);
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let cfg = FieldConfig::default();
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(FieldConfig::from_json_str(&text).unwrap(), cfg);
    }

    #[test]
    fn from_json_str_validates() {
        let err = FieldConfig::from_json_str(r#"{ "area_per_particle": -5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = FieldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = FieldConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn pick_color_follows_weights() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.pick_color(0.0), Rgb::VIOLET);
        assert_eq!(cfg.pick_color(0.39), Rgb::VIOLET);
        assert_eq!(cfg.pick_color(0.41), Rgb::CYAN);
        assert_eq!(cfg.pick_color(0.69), Rgb::CYAN);
        assert_eq!(cfg.pick_color(0.71), Rgb::MAGENTA);
        assert_eq!(cfg.pick_color(0.999), Rgb::MAGENTA);
        assert_eq!(cfg.pick_color(1.0), Rgb::MAGENTA);
    }
}
