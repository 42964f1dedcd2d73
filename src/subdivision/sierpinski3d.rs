use glam::Vec3;

use crate::cells::TetraCell;
use crate::traits::CellGenerator;

/// Sierpinski tetrahedron: one half-scale tetra per parent vertex, built from
/// the edge midpoints around that vertex
#[derive(Debug, Clone, Copy)]
pub struct Sierpinski3d {
    root: TetraCell,
}

impl Sierpinski3d {
    pub fn new(center: Vec3, size: f32) -> Self {
        Self {
            root: TetraCell::regular(center, size),
        }
    }
}

impl CellGenerator for Sierpinski3d {
    type Cell = TetraCell;

    fn name(&self) -> &str {
        "sierpinski-3d"
    }

    fn root(&self) -> TetraCell {
        self.root
    }

    fn branching(&self) -> usize {
        4
    }

    fn subdivide(&self, parent: &TetraCell, out: &mut Vec<TetraCell>) {
        let [a, b, c, d] = parent.corners();
        let m01 = (a + b) * 0.5;
        let m02 = (a + c) * 0.5;
        let m03 = (a + d) * 0.5;
        let m12 = (b + c) * 0.5;
        let m13 = (b + d) * 0.5;
        let m23 = (c + d) * 0.5;

        out.push(TetraCell::new(a, m01, m02, m03));
        out.push(TetraCell::new(b, m01, m12, m13));
        out.push(TetraCell::new(c, m02, m12, m23));
        out.push(TetraCell::new(d, m03, m13, m23));
    }
}
