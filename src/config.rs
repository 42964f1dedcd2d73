// config.rs - Generation settings, built-in presets and JSON config files
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::dispatch::{DrawMode, FractalKind, FractalSpec};
use crate::shapes::initial_shape_or_triangle;
use crate::subdivision::VicsekPattern;
use crate::traits::Generations;

/// Highest iteration count the binary will run; cell counts grow as
/// branching^iterations.
pub const ITERATION_CAP: u32 = 6;

/// String-typed generation settings as they come from a file or the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FractalConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub initial_shape: String,
    #[serde(alias = "iteration")]
    pub iterations: u32,
    pub size: f32,
    pub center: [f32; 3],
    #[serde(alias = "offsetAngle")]
    pub rotation: f32,
    pub draw_mode: String,
    pub solid: bool,
    pub pattern: VicsekPattern,
    pub generations: Generations,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            kind: "koch".to_string(),
            initial_shape: "triangle".to_string(),
            iterations: 0,
            size: 3.0,
            center: [0.0; 3],
            rotation: 6.0,
            draw_mode: "line".to_string(),
            solid: false,
            pattern: VicsekPattern::default(),
            generations: Generations::Current,
        }
    }
}

impl FractalConfig {
    /// Loads a JSON config file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: FractalConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        log::info!(
            "Loaded config {:?}: type={}, shape={}",
            path,
            config.kind,
            config.initial_shape
        );
        Ok(config)
    }

    /// Resolves names into a typed request and builds the seed. Unknown kind,
    /// shape or mode names fall back with a warning.
    pub fn to_spec(&self) -> FractalSpec {
        let kind = FractalKind::parse_or_koch(&self.kind);
        let seed = initial_shape_or_triangle(&self.initial_shape, self.size, self.rotation);

        FractalSpec {
            kind,
            seed,
            iterations: self.iterations,
            mode: DrawMode::parse_or_line(&self.draw_mode),
            size: self.size,
            center: Vec3::from_array(self.center),
            solid: self.solid,
            pattern: self.pattern,
            generations: self.generations,
        }
    }
}

/// Built-in configurations, numbered 1 to 8 in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    KochTriangle,
    KochHexagon,
    SierpinskiTriangle,
    Vicsek,
    HilbertCurve,
    Circle,
    H,
    TSquare,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::KochTriangle,
        Preset::KochHexagon,
        Preset::SierpinskiTriangle,
        Preset::Vicsek,
        Preset::HilbertCurve,
        Preset::Circle,
        Preset::H,
        Preset::TSquare,
    ];

    /// 1-based lookup; out-of-range indices give `None`
    pub fn from_index(index: usize) -> Option<Preset> {
        index.checked_sub(1).and_then(|i| Preset::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::KochTriangle => "koch-triangle",
            Preset::KochHexagon => "koch-hexagon",
            Preset::SierpinskiTriangle => "sierpinski-triangle",
            Preset::Vicsek => "vicsek",
            Preset::HilbertCurve => "hilbert-curve",
            Preset::Circle => "circle",
            Preset::H => "h",
            Preset::TSquare => "t-square",
        }
    }

    pub fn config(self) -> FractalConfig {
        let base = FractalConfig::default();
        match self {
            Preset::KochTriangle => base,
            Preset::KochHexagon => FractalConfig {
                initial_shape: "hexagon".into(),
                ..base
            },
            Preset::SierpinskiTriangle => FractalConfig {
                kind: "sierpinski".into(),
                initial_shape: "sierpinski".into(),
                rotation: 0.0,
                draw_mode: "mesh".into(),
                ..base
            },
            Preset::Vicsek => FractalConfig {
                kind: "vicsek".into(),
                initial_shape: "vicsek".into(),
                rotation: 0.0,
                draw_mode: "mesh".into(),
                ..base
            },
            Preset::HilbertCurve => FractalConfig {
                kind: "hilbert".into(),
                initial_shape: "hilbert".into(),
                rotation: 0.0,
                ..base
            },
            Preset::Circle => FractalConfig {
                kind: "circle".into(),
                initial_shape: "circle".into(),
                rotation: 0.0,
                generations: Generations::All,
                ..base
            },
            Preset::H => FractalConfig {
                kind: "h".into(),
                initial_shape: "line".into(),
                rotation: 0.0,
                ..base
            },
            Preset::TSquare => FractalConfig {
                kind: "t".into(),
                initial_shape: "vicsek".into(),
                rotation: 0.0,
                draw_mode: "mesh".into(),
                generations: Generations::All,
                ..base
            },
        }
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Preset::from_index(index)
                .with_context(|| format!("Preset index out of range: {}", index));
        }
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .with_context(|| format!("Unknown preset: {}", s))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
