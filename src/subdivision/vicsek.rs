use glam::Vec3;

use crate::cells::SquareCell;
use crate::error::FractalError;
use crate::math::AABB;
use crate::traits::CellGenerator;

/// Edge length of the fallback root square
pub const DEFAULT_SQUARE_SIZE: f32 = 10.0;

/// Vicsek fractal: center plus the four diagonal corners of a 3x3 split
#[derive(Debug, Clone, Copy)]
pub struct Vicsek {
    root: SquareCell,
}

impl Vicsek {
    pub fn new(root: SquareCell) -> Self {
        Self { root }
    }

    /// Root square spanning the seed's bounding box along X
    pub fn from_seed(seed: &[Vec3]) -> Self {
        match AABB::from_points(seed) {
            Some(bounds) => Self::new(SquareCell::new(bounds.center(), bounds.extent().x.abs())),
            None => {
                let err = FractalError::InvalidSeedArity {
                    expected: "at least 1 point",
                    actual: 0,
                };
                log::warn!("vicsek: {}, using the default square", err);
                Self::new(SquareCell::new(Vec3::ZERO, DEFAULT_SQUARE_SIZE))
            }
        }
    }
}

impl CellGenerator for Vicsek {
    type Cell = SquareCell;

    fn name(&self) -> &str {
        "vicsek"
    }

    fn root(&self) -> SquareCell {
        self.root
    }

    fn branching(&self) -> usize {
        5
    }

    fn subdivide(&self, parent: &SquareCell, out: &mut Vec<SquareCell>) {
        let child = parent.size / 3.0;
        let off = parent.size / 3.0;
        let c = parent.center;

        out.push(SquareCell::new(c, child));
        out.push(SquareCell::new(c + Vec3::new(-off, off, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(off, off, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(-off, -off, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(off, -off, 0.0), child));
    }
}
