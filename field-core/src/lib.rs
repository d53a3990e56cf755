//! Core particle-field simulation library.
//!
//! Main components:
//! - [`field`] — the [`field::ParticleField`] simulator that owns everything below.
//! - [`particle`] — particles and the particle set.
//! - [`phases`] — per-frame update passes (motion, pulse, pointer, wrap).
//! - [`connections`] — nearby-pair search, brute force and grid-accelerated.
//! - [`render`] — draw passes that paint the field through a [`canvas::Canvas`].
//! - [`canvas`] — the drawing-surface trait and a recording implementation.
//! - [`config`] — tunable constants for spawning, motion and rendering.
//! - [`surface`] — surface dimensions and toroidal wraparound.
//! - [`input`] — pointer state fed by host events.
//! - [`clock`] — fixed-step virtual frame clock.
//! - [`error`] — configuration errors.
//! - [`types`] — shared colors and IDs.

pub mod canvas;
pub mod clock;
pub mod config;
pub mod connections;
pub mod error;
pub mod field;
pub mod input;
pub mod particle;
pub mod phases;
pub mod render;
pub mod surface;
pub mod types;

pub use field::ParticleField;
