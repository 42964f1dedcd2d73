mod cube;
mod square;
mod tetra;
mod triangle;

pub use cube::CubeCell;
pub use square::SquareCell;
pub use tetra::TetraCell;
pub use triangle::TriangleCell;

use glam::Vec3;
use serde::Serialize;

use crate::math::PointSequence;
use crate::traits::FractalCell;

/// Any of the mesh-mode cell shapes
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Cell {
    Square(SquareCell),
    Triangle(TriangleCell),
    Cube(CubeCell),
    Tetra(TetraCell),
}

impl Cell {
    fn inner(&self) -> &dyn FractalCell {
        match self {
            Cell::Square(c) => c,
            Cell::Triangle(c) => c,
            Cell::Cube(c) => c,
            Cell::Tetra(c) => c,
        }
    }
}

impl FractalCell for Cell {
    fn center(&self) -> Vec3 {
        self.inner().center()
    }

    fn size(&self) -> f32 {
        self.inner().size()
    }

    fn vertices(&self) -> Vec<Vec3> {
        self.inner().vertices()
    }

    fn triangle_indices(&self) -> &'static [u32] {
        self.inner().triangle_indices()
    }
}

impl From<SquareCell> for Cell {
    fn from(c: SquareCell) -> Self {
        Cell::Square(c)
    }
}

impl From<TriangleCell> for Cell {
    fn from(c: TriangleCell) -> Self {
        Cell::Triangle(c)
    }
}

impl From<CubeCell> for Cell {
    fn from(c: CubeCell) -> Self {
        Cell::Cube(c)
    }
}

impl From<TetraCell> for Cell {
    fn from(c: TetraCell) -> Self {
        Cell::Tetra(c)
    }
}

/// Flattens cells into one polyline of closed loops: each cell's vertices in
/// winding order, followed by its first vertex again.
pub fn cells_to_closed_loops<C: FractalCell>(cells: &[C]) -> PointSequence {
    let mut out = Vec::with_capacity(cells.len() * 5);
    for cell in cells {
        let vertices = cell.vertices();
        if let Some(first) = vertices.first().copied() {
            out.extend(vertices);
            out.push(first);
        }
    }
    out
}
