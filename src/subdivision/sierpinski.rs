use glam::Vec3;

use crate::cells::TriangleCell;
use crate::error::FractalError;
use crate::traits::CellGenerator;

/// Edge length of the fallback root triangle
pub const DEFAULT_TRIANGLE_SIZE: f32 = 10.0;

/// Sierpinski triangle: each triangle keeps its three corner sub-triangles
/// and drops the inverted middle one.
#[derive(Debug, Clone, Copy)]
pub struct Sierpinski {
    root: TriangleCell,
}

impl Sierpinski {
    pub fn new(root: TriangleCell) -> Self {
        Self { root }
    }

    /// Root from the first three seed points
    pub fn from_seed(seed: &[Vec3]) -> Self {
        match seed {
            [a, b, c, ..] => Self::new(TriangleCell::new(*a, *b, *c)),
            _ => {
                let err = FractalError::InvalidSeedArity {
                    expected: "at least 3 points",
                    actual: seed.len(),
                };
                log::warn!("sierpinski: {}, using the default triangle", err);
                Self::new(TriangleCell::equilateral(Vec3::ZERO, DEFAULT_TRIANGLE_SIZE))
            }
        }
    }
}

impl CellGenerator for Sierpinski {
    type Cell = TriangleCell;

    fn name(&self) -> &str {
        "sierpinski"
    }

    fn root(&self) -> TriangleCell {
        self.root
    }

    fn branching(&self) -> usize {
        3
    }

    fn subdivide(&self, parent: &TriangleCell, out: &mut Vec<TriangleCell>) {
        let [v0, v1, v2] = parent.corners();
        let m01 = (v0 + v1) * 0.5;
        let m12 = (v1 + v2) * 0.5;
        let m20 = (v2 + v0) * 0.5;

        out.push(TriangleCell::new(v0, m01, m20));
        out.push(TriangleCell::new(m01, v1, m12));
        out.push(TriangleCell::new(m20, m12, v2));
    }
}
