//! The particle-field simulator.
//!
//! [`ParticleField`] owns the particles, the pointer state, the frame clock
//! and the scratch buffers for the connection search. A host drives it
//! with three kinds of calls:
//!
//! - input adapters: [`ParticleField::pointer_moved`],
//!   [`ParticleField::pointer_left`], [`ParticleField::resize`];
//! - once per display frame: [`ParticleField::frame`], which advances the
//!   clock, runs [`ParticleField::tick`] and then
//!   [`ParticleField::render`];
//! - accessors for inspection.
//!
//! `tick` and `render` are public so tests can drive the field with
//! synthetic times.

use crate::{
    canvas::Canvas,
    clock::FrameClock,
    config::FieldConfig,
    connections::{self, Connection, SpatialGrid},
    error::ConfigError,
    input::PointerState,
    particle::ParticleSet,
    phases, render,
    surface::Surface,
};
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

/// The simulator for one surface.
///
/// [`ParticleField`] glues together:
/// - The field state: [`ParticleSet`], [`PointerState`], [`FrameClock`].
/// - Per-frame scratch: the connection list and the [`SpatialGrid`].
/// - The RNG used whenever the particle set is respawned.
///
/// The typical host frame is:
/// 1. Forward input with [`ParticleField::pointer_moved`],
///    [`ParticleField::pointer_left`] and [`ParticleField::resize`].
/// 2. Call [`ParticleField::frame`] once.
///
/// ### Fields
/// - `cfg` - Validated configuration; fixed for the field's lifetime.
/// - `surface` - Current surface dimensions.
/// - `particles` - The particle set, replaced wholesale on reset.
/// - `pointer` - Pointer state read by the pointer phase and glow pass.
/// - `clock` - Fixed-step virtual time.
///
/// - `connections` - Pairs found by the last render, reused every frame.
/// - `grid` - Bucketing scratch for large fields.
///
/// - `rng` - Random number generator for spawning.
#[derive(Debug)]
pub struct ParticleField {
    cfg: FieldConfig,
    surface: Surface,
    particles: ParticleSet,
    pointer: PointerState,
    clock: FrameClock,

    connections: Vec<Connection>,
    grid: SpatialGrid,

    rng: StdRng,
}

impl ParticleField {
    /// Creates a field for `surface` seeded from the thread-local RNG.
    ///
    /// ### Returns
    /// - `Ok` with a field holding `surface.particle_count(&cfg)` particles.
    /// - `Err` if `cfg` fails [`FieldConfig::validate`].
    pub fn new(surface: Surface, cfg: FieldConfig) -> Result<Self, ConfigError> {
        Self::with_rng(surface, cfg, StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates a field whose particles are fully determined by `seed`.
    pub fn with_seed(surface: Surface, cfg: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(surface, cfg, StdRng::seed_from_u64(seed))
    }

    fn with_rng(surface: Surface, cfg: FieldConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let particles = ParticleSet::random_in_surface(&surface, &cfg, &mut rng);
        log::debug!(
            "particle field created: {}x{} surface, {} particles",
            surface.width,
            surface.height,
            particles.len()
        );

        Ok(Self {
            clock: FrameClock::new(cfg.frame_time_step),
            cfg,
            surface,
            particles,
            pointer: PointerState::default(),
            connections: Vec::new(),
            grid: SpatialGrid::new(),
            rng,
        })
    }

    /// Discards every particle and spawns a new set for the current surface.
    ///
    /// The pointer state and the clock are kept.
    pub fn reset(&mut self) {
        self.particles = ParticleSet::random_in_surface(&self.surface, &self.cfg, &mut self.rng);
        self.connections.clear();
        log::debug!("particle field reset: {} particles", self.particles.len());
    }

    /// Adopts new surface dimensions and resets the field.
    pub fn resize(&mut self, surface: Surface) {
        log::debug!(
            "surface resized from {}x{} to {}x{}",
            self.surface.width,
            self.surface.height,
            surface.width,
            surface.height
        );
        self.surface = surface;
        self.reset();
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.moved(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    /// Advances every particle one frame at virtual time `t`.
    ///
    /// Runs [`phases::update`]: motion, pulse, pointer pull, wraparound.
    ///
    /// ### Parameters
    /// - `t` - Virtual time of this frame; hosts pass increasing values.
    pub fn tick(&mut self, t: f64) {
        phases::update(&mut self.particles, &self.pointer, &self.surface, &self.cfg, t);
    }

    /// Paints the current state: pointer glow, particles, then connections.
    pub fn render(&mut self, canvas: &mut impl Canvas) {
        self.find_connections();

        canvas.clear(self.surface);
        render::pointer_glow_pass(&self.pointer, &self.cfg, canvas);
        render::particle_pass(&self.particles, &self.cfg, canvas);
        render::connection_pass(&self.particles, &self.connections, &self.cfg, canvas);
    }

    /// One host frame: advance the clock, update, render. Returns the
    /// virtual time the frame was simulated at.
    pub fn frame(&mut self, canvas: &mut impl Canvas) -> f64 {
        let t = self.clock.advance();
        self.tick(t);
        self.render(canvas);
        log::trace!(
            "frame {} at t={}: {} particles, {} connections",
            self.clock.frames(),
            t,
            self.particles.len(),
            self.connections.len()
        );
        t
    }

    fn find_connections(&mut self) {
        let particles = &self.particles.particles;
        let max_distance = self.cfg.connect_distance;
        if particles.len() > self.cfg.grid_threshold {
            self.grid.rebuild(&self.surface, max_distance, particles);
            self.grid
                .connections(particles, max_distance, &mut self.connections);
        } else {
            connections::brute_force(particles, max_distance, &mut self.connections);
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Connections found by the last [`ParticleField::render`].
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }
}
