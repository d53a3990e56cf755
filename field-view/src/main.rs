//! Application entry point for the particle field viewer.
//!
//! This binary parses the command line, sets up logging, builds the
//! [`ParticleField`] and hands it to [`Viewer`] inside an eframe window.

mod egui_canvas;
mod viewer;

use anyhow::{Context, Result};
use clap::Parser;
use field_core::{ParticleField, config::FieldConfig, surface::Surface};
use std::path::PathBuf;
use viewer::Viewer;

/// Animated particle field background in a native window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file overriding field settings; missing keys keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible field.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if args.verbose > 0 {
        log::set_max_level(match args.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if args.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }
}

fn build_field(args: &Args) -> Result<ParticleField> {
    let cfg = match &args.config {
        Some(path) => FieldConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FieldConfig::default(),
    };

    // The first frame resizes to the real drawing rect.
    let surface = Surface::new(args.width, args.height);
    let field = match args.seed {
        Some(seed) => ParticleField::with_seed(surface, cfg, seed),
        None => ParticleField::new(surface, cfg),
    }
    .context("building particle field")?;
    Ok(field)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let viewer = Viewer::new(build_field(&args)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Particle Field")
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Particle Field",
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {e}"))
}
