//! Maps a fractal kind and draw mode onto the generator that serves it.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::cells::{cells_to_closed_loops, Cell};
use crate::curves::{Gosper, HTree, Hilbert, Koch};
use crate::error::FractalError;
use crate::math::{PointSequence, AABB};
use crate::subdivision::{
    circle, Sierpinski, Sierpinski3d, TSquare, TSquare3d, Vicsek, Vicsek3d, VicsekPattern,
};
use crate::traits::{CellGenerator, CurveGenerator, FractalCell, Generations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalKind {
    Koch,
    Gosper,
    Hilbert,
    H,
    Circle,
    Sierpinski,
    Vicsek,
    TSquare,
}

impl FractalKind {
    pub const ALL: [FractalKind; 8] = [
        FractalKind::Koch,
        FractalKind::Gosper,
        FractalKind::Hilbert,
        FractalKind::H,
        FractalKind::Circle,
        FractalKind::Sierpinski,
        FractalKind::Vicsek,
        FractalKind::TSquare,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Koch => "koch",
            FractalKind::Gosper => "gosper",
            FractalKind::Hilbert => "hilbert",
            FractalKind::H => "h",
            FractalKind::Circle => "circle",
            FractalKind::Sierpinski => "sierpinski",
            FractalKind::Vicsek => "vicsek",
            FractalKind::TSquare => "t",
        }
    }

    /// Case-insensitive lookup that falls back to Koch with a warning
    pub fn parse_or_koch(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: FractalError| {
            log::warn!("{}, falling back to koch", err);
            FractalKind::Koch
        })
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "koch" => Ok(FractalKind::Koch),
            "gosper" => Ok(FractalKind::Gosper),
            "hilbert" => Ok(FractalKind::Hilbert),
            "h" => Ok(FractalKind::H),
            "circle" => Ok(FractalKind::Circle),
            "sierpinski" => Ok(FractalKind::Sierpinski),
            "vicsek" => Ok(FractalKind::Vicsek),
            "t" | "tsquare" => Ok(FractalKind::TSquare),
            _ => Err(FractalError::UnsupportedFractalKind(s.to_string())),
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output representation requested by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Line,
    Mesh,
}

impl DrawMode {
    /// Empty means line; unknown modes fall back to line with a warning
    pub fn parse_or_line(name: &str) -> Self {
        if name.trim().is_empty() {
            return DrawMode::Line;
        }
        name.parse().unwrap_or_else(|err: FractalError| {
            log::warn!("{}, falling back to line", err);
            DrawMode::Line
        })
    }
}

impl FromStr for DrawMode {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(DrawMode::Line),
            "mesh" => Ok(DrawMode::Mesh),
            _ => Err(FractalError::UnsupportedDrawMode(s.to_string())),
        }
    }
}

/// One generation request. Built per call and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalSpec {
    pub kind: FractalKind,
    pub seed: PointSequence,
    pub iterations: u32,
    pub mode: DrawMode,
    /// Root circle radius for circle loops, root edge for the 3D variants
    pub size: f32,
    /// Root center for the 3D variants
    pub center: Vec3,
    /// Route Vicsek, T-square and Sierpinski to their 3D generators
    pub solid: bool,
    pub pattern: VicsekPattern,
    pub generations: Generations,
}

impl FractalSpec {
    pub fn new(
        kind: FractalKind,
        seed: PointSequence,
        iterations: u32,
        generations: Generations,
    ) -> Self {
        Self {
            kind,
            seed,
            iterations,
            mode: DrawMode::Line,
            size: 3.0,
            center: Vec3::ZERO,
            solid: false,
            pattern: VicsekPattern::default(),
            generations,
        }
    }

    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }
}

/// Geometry handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum GenerationResult {
    /// One polyline
    Line(PointSequence),
    /// Independent segments as consecutive point pairs
    Segments(PointSequence),
    /// Mesh-mode cells
    Cells(Vec<Cell>),
    /// Disjoint closed loops
    Loops(Vec<PointSequence>),
}

impl GenerationResult {
    /// Polylines, segments, cells or loops in the result
    pub fn len(&self) -> usize {
        match self {
            GenerationResult::Line(points) => usize::from(!points.is_empty()),
            GenerationResult::Segments(points) => points.len() / 2,
            GenerationResult::Cells(cells) => cells.len(),
            GenerationResult::Loops(loops) => loops.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point_count(&self) -> usize {
        match self {
            GenerationResult::Line(points) | GenerationResult::Segments(points) => points.len(),
            GenerationResult::Cells(cells) => cells.iter().map(|c| c.vertices().len()).sum(),
            GenerationResult::Loops(loops) => loops.iter().map(Vec::len).sum(),
        }
    }

    pub fn bounds(&self) -> Option<AABB> {
        let boxes: Vec<AABB> = match self {
            GenerationResult::Line(points) | GenerationResult::Segments(points) => {
                AABB::from_points(points).into_iter().collect()
            }
            GenerationResult::Cells(cells) => cells
                .iter()
                .filter_map(|c| AABB::from_points(&c.vertices()))
                .collect(),
            GenerationResult::Loops(loops) => {
                loops.iter().filter_map(|l| AABB::from_points(l)).collect()
            }
        };
        boxes.into_iter().reduce(|a, b| a.union(&b))
    }
}

/// Flat polyline for `kind`. Vicsek and T-square in mesh mode are served
/// from their cell generators by the caller, so they yield nothing here.
pub fn dispatch_line(
    kind: FractalKind,
    mode: DrawMode,
    seed: &[Vec3],
    iterations: u32,
) -> PointSequence {
    match (kind, mode) {
        (FractalKind::Vicsek, DrawMode::Mesh) => Vec::new(),
        (FractalKind::Vicsek, DrawMode::Line) => {
            Vicsek::from_seed(seed).generate_polyline(iterations, Generations::Current)
        }
        (FractalKind::TSquare, DrawMode::Mesh) => Vec::new(),
        (FractalKind::TSquare, DrawMode::Line) => {
            TSquare::from_seed(seed).generate_polyline(iterations, Generations::All)
        }
        (FractalKind::Sierpinski, _) => {
            Sierpinski::from_seed(seed).generate_polyline(iterations, Generations::Current)
        }
        (FractalKind::Gosper, _) => Gosper.generate(seed, iterations),
        (FractalKind::Koch, _) => Koch.generate(seed, iterations),
        (FractalKind::Hilbert, _) => Hilbert.generate(seed, iterations),
        (FractalKind::Circle, _) => circle::generate_flat(seed, iterations),
        (FractalKind::H, _) => HTree.generate(seed, iterations),
    }
}

/// Name-based entry point: unknown kinds log a warning and run Koch.
pub fn dispatch(
    kind_name: &str,
    mode: DrawMode,
    seed: &[Vec3],
    iterations: u32,
) -> GenerationResult {
    let kind = FractalKind::parse_or_koch(kind_name);
    GenerationResult::Line(dispatch_line(kind, mode, seed, iterations))
}

fn into_cells<C: Into<Cell>>(cells: Vec<C>) -> GenerationResult {
    GenerationResult::Cells(cells.into_iter().map(Into::into).collect())
}

/// Generates the renderer-ready result for `spec` from scratch.
pub fn generate(spec: &FractalSpec) -> GenerationResult {
    let FractalSpec {
        kind,
        ref seed,
        iterations,
        mode,
        size,
        center,
        solid,
        pattern,
        generations,
    } = *spec;

    log::debug!(
        "generating {} ({:?}, solid={}, iterations={}, generations={})",
        kind,
        mode,
        solid,
        iterations,
        generations
    );

    match (kind, mode) {
        (FractalKind::H, _) => GenerationResult::Segments(HTree.generate(seed, iterations)),

        (FractalKind::Circle, DrawMode::Line) => {
            GenerationResult::Loops(circle::generate_loops(seed, iterations, size, generations))
        }

        (FractalKind::Vicsek, _) if solid => {
            into_cells(Vicsek3d::new(center, size, pattern).generate(iterations, generations))
        }
        (FractalKind::Vicsek, DrawMode::Mesh) => {
            into_cells(Vicsek::from_seed(seed).generate(iterations, generations))
        }
        (FractalKind::Vicsek, DrawMode::Line) => GenerationResult::Line(cells_to_closed_loops(
            &Vicsek::from_seed(seed).generate(iterations, generations),
        )),

        (FractalKind::TSquare, _) if solid => {
            into_cells(TSquare3d::new(center, size).generate(iterations, generations))
        }
        (FractalKind::TSquare, DrawMode::Mesh) => {
            into_cells(TSquare::from_seed(seed).generate(iterations, generations))
        }
        (FractalKind::TSquare, DrawMode::Line) => GenerationResult::Line(cells_to_closed_loops(
            &TSquare::from_seed(seed).generate(iterations, generations),
        )),

        (FractalKind::Sierpinski, _) if solid => {
            into_cells(Sierpinski3d::new(center, size).generate(iterations, generations))
        }
        (FractalKind::Sierpinski, DrawMode::Mesh) => {
            into_cells(Sierpinski::from_seed(seed).generate(iterations, generations))
        }
        (FractalKind::Sierpinski, DrawMode::Line) => GenerationResult::Line(cells_to_closed_loops(
            &Sierpinski::from_seed(seed).generate(iterations, generations),
        )),

        (FractalKind::Circle, DrawMode::Mesh)
        | (FractalKind::Koch, _)
        | (FractalKind::Gosper, _)
        | (FractalKind::Hilbert, _) => {
            GenerationResult::Line(dispatch_line(kind, mode, seed, iterations))
        }
    }
}
