// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::{FractalConfig, Preset};
use crate::subdivision::VicsekPattern;
use crate::traits::Generations;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Counts and bounds
    Summary,
    /// Full geometry as JSON
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fractal-gen")]
#[command(about = "Procedural 2D/3D fractal geometry generator", long_about = None)]
pub struct Cli {
    /// Built-in preset, by name or 1-based index
    #[arg(long, default_value = "koch-triangle")]
    pub preset: String,

    /// JSON config file, used in place of the preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fractal kind (koch, gosper, hilbert, h, circle, sierpinski, vicsek, t)
    #[arg(long)]
    pub kind: Option<String>,

    /// Initial shape (triangle, hexagon, square, sierpinski, hilbert, circle, line)
    #[arg(long)]
    pub shape: Option<String>,

    #[arg(short, long)]
    pub iterations: Option<u32>,

    #[arg(long)]
    pub size: Option<f32>,

    #[arg(long, allow_hyphen_values = true)]
    pub rotation: Option<f32>,

    /// Draw mode (line or mesh)
    #[arg(long)]
    pub mode: Option<String>,

    /// Use the 3D generators for vicsek, t and sierpinski
    #[arg(long)]
    pub solid: bool,

    /// Vicsek-3D pattern (standard7 or union-face-rules)
    #[arg(long)]
    pub pattern: Option<VicsekPattern>,

    /// Keep only the last generation (current) or every generation (all)
    #[arg(long)]
    pub generations: Option<Generations>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Generate every fractal kind in parallel and print a count table
    #[arg(long)]
    pub compare: bool,

    /// Disable console output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Preset first, then the config file, then individual flags
    pub fn resolve_config(&self) -> Result<FractalConfig> {
        let preset: Preset = self.preset.parse()?;
        let mut config = match &self.config {
            Some(path) => FractalConfig::load(path)?,
            None => preset.config(),
        };

        if let Some(kind) = &self.kind {
            config.kind = kind.clone();
        }
        if let Some(shape) = &self.shape {
            config.initial_shape = shape.clone();
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(rotation) = self.rotation {
            config.rotation = rotation;
        }
        if let Some(mode) = &self.mode {
            config.draw_mode = mode.clone();
        }
        if self.solid {
            config.solid = true;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }

        Ok(config)
    }
}
