use crate::{config::FieldConfig, surface::Surface, types::Rgb};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One animated point-light in the field.
///
/// `size` and `opacity` are recomputed every frame from the base values;
/// only `pos` carries state from one frame to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_size: f32,
    pub size: f32,
    pub base_opacity: f32,
    pub opacity: f32,
    pub color: Rgb,
    pub pulse_rate: f32,
    pub pulse_phase: f32,
}

impl Particle {
    /// A motionless violet particle at `pos` with mid-range looks.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            base_size: 2.0,
            size: 2.0,
            base_opacity: 0.5,
            opacity: 0.5,
            color: Rgb::VIOLET,
            pulse_rate: 0.02,
            pulse_phase: 0.0,
        }
    }

    pub fn random(surface: &Surface, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            sample_unit(rng) * surface.width,
            sample_unit(rng) * surface.height,
        );
        let vel = Vec2::new(
            sample(rng, cfg.speed_range.min, cfg.speed_range.max),
            sample(rng, cfg.speed_range.min, cfg.speed_range.max),
        );
        let base_size = sample(rng, cfg.size_range.min, cfg.size_range.max);
        let base_opacity = sample(rng, cfg.opacity_range.min, cfg.opacity_range.max);
        let color = cfg.pick_color(sample_unit(rng));
        let pulse_rate = sample(rng, cfg.pulse_rate_range.min, cfg.pulse_rate_range.max);
        let pulse_phase = sample_unit(rng) * TAU;

        Self {
            pos,
            vel,
            base_size,
            size: base_size,
            base_opacity,
            opacity: base_opacity,
            color,
            pulse_rate,
            pulse_phase,
        }
    }

    /// The oscillation term `sin(t * rate + phase)`, in `[-1, 1]`.
    #[inline]
    pub fn pulse(&self, t: f64) -> f32 {
        (t * self.pulse_rate as f64 + self.pulse_phase as f64).sin() as f32
    }
}

#[inline]
fn sample_unit(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>()
}

/// Uniform sample in `[min, max]`; a collapsed range yields `min`.
#[inline]
fn sample(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min < max {
        rng.random_range(min..=max)
    } else {
        min
    }
}

#[derive(Debug, Default)]
pub struct ParticleSet {
    pub particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Creates a freshly randomized set sized to `surface`.
    pub fn random_in_surface(surface: &Surface, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let count = surface.particle_count(cfg);
        let particles = (0..count)
            .map(|_| Particle::random(surface, cfg, rng))
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_particles_respect_config_ranges() {
        let cfg = FieldConfig::default();
        let surface = Surface::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(7);

        let set = ParticleSet::random_in_surface(&surface, &cfg, &mut rng);
        assert_eq!(set.len(), 30);

        let colors = [Rgb::VIOLET, Rgb::CYAN, Rgb::MAGENTA];
        for p in &set.particles {
            assert!(surface.contains(p.pos), "spawned outside: {:?}", p.pos);
            assert!(cfg.speed_range.contains(p.vel.x));
            assert!(cfg.speed_range.contains(p.vel.y));
            assert!(cfg.size_range.contains(p.base_size));
            assert!(cfg.opacity_range.contains(p.base_opacity));
            assert!(cfg.pulse_rate_range.contains(p.pulse_rate));
            assert!((0.0..=TAU).contains(&p.pulse_phase));
            assert!(colors.contains(&p.color));
            assert_eq!(p.size, p.base_size);
            assert_eq!(p.opacity, p.base_opacity);
        }
    }

    #[test]
    fn same_seed_gives_same_particles() {
        let cfg = FieldConfig::default();
        let surface = Surface::new(500.0, 500.0);

        let a = ParticleSet::random_in_surface(&surface, &cfg, &mut StdRng::seed_from_u64(3));
        let b = ParticleSet::random_in_surface(&surface, &cfg, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn collapsed_range_yields_constant() {
        let cfg = FieldConfig {
            size_range: crate::config::ValueRange::new(2.0, 2.0),
            ..FieldConfig::default()
        };
        let surface = Surface::new(400.0, 400.0);
        let set = ParticleSet::random_in_surface(&surface, &cfg, &mut StdRng::seed_from_u64(1));
        assert!(set.particles.iter().all(|p| p.base_size == 2.0));
    }

    #[test]
    fn palette_mix_is_roughly_weighted() {
        let cfg = FieldConfig::default();
        let surface = Surface::new(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(11);

        let n = 4000;
        let violet = (0..n)
            .map(|_| Particle::random(&surface, &cfg, &mut rng))
            .filter(|p| p.color == Rgb::VIOLET)
            .count();
        let share = violet as f32 / n as f32;
        assert!((0.35..0.45).contains(&share), "violet share {share}");
    }

    #[test]
    fn pulse_stays_in_unit_interval() {
        let p = Particle::at(Vec2::ZERO);
        for i in 0..500 {
            let s = p.pulse(i as f64 * 16.0);
            assert!((-1.0..=1.0).contains(&s));
        }
    }
}
