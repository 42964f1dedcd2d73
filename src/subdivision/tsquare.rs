use glam::Vec3;

use crate::cells::SquareCell;
use crate::error::FractalError;
use crate::math::AABB;
use crate::traits::CellGenerator;

use super::vicsek::DEFAULT_SQUARE_SIZE;

/// T-square: a half-size square centered on each corner of its parent
#[derive(Debug, Clone, Copy)]
pub struct TSquare {
    root: SquareCell,
}

impl TSquare {
    pub fn new(root: SquareCell) -> Self {
        Self { root }
    }

    /// Root square from a closed outline `p0 p1 p2 p3 p0`
    pub fn from_seed(seed: &[Vec3]) -> Self {
        let bounds = match AABB::from_points(seed) {
            Some(bounds) if seed.len() >= 4 => bounds,
            _ => {
                let err = FractalError::InvalidSeedArity {
                    expected: "at least 4 points",
                    actual: seed.len(),
                };
                log::warn!("t-square: {}, using the default square", err);
                return Self::new(SquareCell::new(Vec3::ZERO, DEFAULT_SQUARE_SIZE));
            }
        };

        let size = bounds.extent().x.abs();
        let size = if size <= 0.0 { 1.0 } else { size };
        Self::new(SquareCell::new(bounds.center(), size))
    }
}

impl CellGenerator for TSquare {
    type Cell = SquareCell;

    fn name(&self) -> &str {
        "t-square"
    }

    fn root(&self) -> SquareCell {
        self.root
    }

    fn branching(&self) -> usize {
        4
    }

    fn subdivide(&self, parent: &SquareCell, out: &mut Vec<SquareCell>) {
        let child = parent.size * 0.5;
        let h = parent.size * 0.5;
        let c = parent.center;

        out.push(SquareCell::new(c + Vec3::new(-h, -h, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(-h, h, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(h, h, 0.0), child));
        out.push(SquareCell::new(c + Vec3::new(h, -h, 0.0), child));
    }
}
