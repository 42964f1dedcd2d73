use glam::Vec3;

use crate::cells::CubeCell;
use crate::traits::CellGenerator;

/// T-square in 3D: a third-size cube centered on each of the parent's eight corners
#[derive(Debug, Clone, Copy)]
pub struct TSquare3d {
    root: CubeCell,
}

impl TSquare3d {
    pub fn new(center: Vec3, size: f32) -> Self {
        Self {
            root: CubeCell::new(center, size),
        }
    }
}

impl CellGenerator for TSquare3d {
    type Cell = CubeCell;

    fn name(&self) -> &str {
        "t-square-3d"
    }

    fn root(&self) -> CubeCell {
        self.root
    }

    fn branching(&self) -> usize {
        8
    }

    fn subdivide(&self, parent: &CubeCell, out: &mut Vec<CubeCell>) {
        let child = parent.size / 3.0;
        let offset = parent.size * 0.5;

        for dx in [-1.0, 1.0] {
            for dy in [-1.0, 1.0] {
                for dz in [-1.0, 1.0] {
                    let corner = parent.center + Vec3::new(dx, dy, dz) * offset;
                    out.push(CubeCell::new(corner, child));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Generations;

    #[test]
    fn test_children_on_corners() {
        let cells = TSquare3d::new(Vec3::ZERO, 6.0).generate(1, Generations::Current);
        assert_eq!(cells.len(), 8);
        for cell in &cells {
            assert_eq!(cell.center.abs(), Vec3::splat(3.0));
            assert_eq!(cell.size, 2.0);
        }
    }

    #[test]
    fn test_all_generations_keep_root_first() {
        let cells = TSquare3d::new(Vec3::ZERO, 6.0).generate(2, Generations::All);
        assert_eq!(cells.len(), 1 + 8 + 64);
        assert_eq!(cells[0], CubeCell::new(Vec3::ZERO, 6.0));
    }
}
