//! Search for particle pairs close enough to be joined by a line.
//!
//! Two strategies produce the same result: every unordered pair closer
//! than the connection distance, exactly once, as `(a, b)` with `a < b`
//! and sorted by `(a, b)`.
//!
//! - [`brute_force`] checks all `n * (n - 1) / 2` pairs.
//! - [`SpatialGrid`] buckets particles into cells one connection distance
//!   wide and only checks the 3×3 neighborhood of each cell.

use crate::{particle::Particle, surface::Surface, types::ParticleId};
use glam::Vec2;

/// Upper bound on grid cells per bucketed particle.
const MAX_CELLS_PER_PARTICLE: usize = 4;

/// A pair of particles within connection distance of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: ParticleId,
    pub b: ParticleId,
    pub distance: f32,
}

impl Connection {
    /// `1 - distance / max_distance`: `1` for coincident particles,
    /// approaching `0` at the connection limit.
    #[inline]
    pub fn closeness(&self, max_distance: f32) -> f32 {
        1.0 - self.distance / max_distance
    }
}

/// Replaces the contents of `out` with every pair closer than `max_distance`.
pub fn brute_force(particles: &[Particle], max_distance: f32, out: &mut Vec<Connection>) {
    out.clear();
    if !(max_distance > 0.0) {
        return;
    }

    for (a, pa) in particles.iter().enumerate() {
        for (offset, pb) in particles[a + 1..].iter().enumerate() {
            let distance = pa.pos.distance(pb.pos);
            if distance < max_distance {
                out.push(Connection {
                    a,
                    b: a + 1 + offset,
                    distance,
                });
            }
        }
    }
}

/// Uniform bucketing of particle indices, rebuilt every frame.
///
/// The grid keeps its buffers between rebuilds. Cell contents are stored
/// contiguously: the particles of cell `c` are
/// `entries[starts[c]..starts[c + 1]]`.
///
/// The cell count is bounded by the particle count: when the requested
/// cell size would produce more than `MAX_CELLS_PER_PARTICLE` cells per
/// particle, cells are widened. Wider cells only add candidates to the
/// 3×3 neighborhood, they never drop a pair.
#[derive(Debug, Default)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    starts: Vec<usize>,
    entries: Vec<ParticleId>,
    cell_of: Vec<usize>,
    fill: Vec<usize>,
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Cell width actually used by the last rebuild; at least the
    /// requested size.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Buckets `particles` into cells at least `cell_size` wide covering
    /// `surface`.
    ///
    /// Positions outside the surface land in the nearest edge cell.
    pub fn rebuild(&mut self, surface: &Surface, cell_size: f32, particles: &[Particle]) {
        let max_cells = (particles.len() * MAX_CELLS_PER_PARTICLE).max(1) as f32;
        let (w, h) = if surface.is_degenerate() {
            (0.0, 0.0)
        } else {
            (surface.width, surface.height)
        };
        let cell_size = cell_size
            .max((w * h / max_cells).sqrt())
            .max(w.max(h) / max_cells);
        self.cell_size = cell_size;

        let extent = |e: f32| {
            if e.is_finite() && e > 0.0 && cell_size > 0.0 {
                (e / cell_size).floor() as usize + 1
            } else {
                1
            }
        };
        self.cols = extent(surface.width);
        self.rows = extent(surface.height);

        let cells = self.cols * self.rows;
        self.starts.clear();
        self.starts.resize(cells + 1, 0);
        self.cell_of.clear();
        self.entries.clear();
        self.entries.resize(particles.len(), 0);

        // Counting sort by cell index.
        for p in particles {
            let (cx, cy) = self.cell_coords(p.pos);
            let c = cy * self.cols + cx;
            self.cell_of.push(c);
            self.starts[c + 1] += 1;
        }
        for c in 0..cells {
            self.starts[c + 1] += self.starts[c];
        }
        self.fill.clear();
        self.fill.extend_from_slice(&self.starts);
        for (id, &c) in self.cell_of.iter().enumerate() {
            self.entries[self.fill[c]] = id;
            self.fill[c] += 1;
        }
    }

    fn cell_coords(&self, pos: Vec2) -> (usize, usize) {
        let axis = |v: f32, n: usize| {
            let i = (v / self.cell_size).floor();
            if i > 0.0 { (i as usize).min(n - 1) } else { 0 }
        };
        (axis(pos.x, self.cols), axis(pos.y, self.rows))
    }

    /// Particle ids bucketed into cell `(cx, cy)`.
    pub fn cell(&self, cx: usize, cy: usize) -> &[ParticleId] {
        let c = cy * self.cols + cx;
        &self.entries[self.starts[c]..self.starts[c + 1]]
    }

    /// Writes every pair closer than `max_distance` to `out`.
    ///
    /// `max_distance` must not exceed the cell size used in
    /// [`SpatialGrid::rebuild`], and `particles` must be the same slice.
    pub fn connections(&self, particles: &[Particle], max_distance: f32, out: &mut Vec<Connection>) {
        out.clear();
        if !(max_distance > 0.0) || particles.len() != self.cell_of.len() {
            return;
        }

        for (a, pa) in particles.iter().enumerate() {
            let c = self.cell_of[a];
            let (cx, cy) = (c % self.cols, c / self.cols);
            for ny in cy.saturating_sub(1)..=(cy + 1).min(self.rows - 1) {
                for nx in cx.saturating_sub(1)..=(cx + 1).min(self.cols - 1) {
                    for &b in self.cell(nx, ny) {
                        if b <= a {
                            continue;
                        }
                        let distance = pa.pos.distance(particles[b].pos);
                        if distance < max_distance {
                            out.push(Connection { a, b, distance });
                        }
                    }
                }
            }
        }

        out.sort_unstable_by(|x, y| (x.a, x.b).cmp(&(y.a, y.b)));
    }
}
