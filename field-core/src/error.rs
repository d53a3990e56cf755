//! Error types for field configuration.
//!
//! The simulator itself never fails once constructed; every fallible path
//! lives in building or loading a [`crate::config::FieldConfig`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("`{field}` range is wider than a 32-bit float can represent")]
    RangeTooWide { field: &'static str },

    #[error("`max_particles` must be at least 1")]
    ZeroParticles,

    #[error("palette needs at least one color with a positive weight")]
    EmptyPalette,

    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON")]
    Json(#[from] serde_json::Error),
}
