use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::cells::CubeCell;
use crate::error::FractalError;
use crate::traits::CellGenerator;

/// Which of the 27 sub-cubes of a 3x3x3 split survive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VicsekPattern {
    /// Body center and the six face centers
    Standard7,
    /// The 2D Vicsek rule on every face: body center, face centers and corners
    #[default]
    UnionFaceRules,
}

impl VicsekPattern {
    pub fn children(self) -> usize {
        match self {
            VicsekPattern::Standard7 => 7,
            VicsekPattern::UnionFaceRules => 15,
        }
    }
}

impl FromStr for VicsekPattern {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "standard7" | "standard-7" | "standard" => Ok(VicsekPattern::Standard7),
            "union-face-rules" | "unionfacerules" | "union" => Ok(VicsekPattern::UnionFaceRules),
            _ => Err(FractalError::UnsupportedPattern(s.to_string())),
        }
    }
}

const FACE_DIRECTIONS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

#[derive(Debug, Clone, Copy)]
pub struct Vicsek3d {
    root: CubeCell,
    pattern: VicsekPattern,
}

impl Vicsek3d {
    pub fn new(center: Vec3, size: f32, pattern: VicsekPattern) -> Self {
        Self {
            root: CubeCell::new(center, size),
            pattern,
        }
    }
}

impl CellGenerator for Vicsek3d {
    type Cell = CubeCell;

    fn name(&self) -> &str {
        "vicsek-3d"
    }

    fn root(&self) -> CubeCell {
        self.root
    }

    fn branching(&self) -> usize {
        self.pattern.children()
    }

    fn subdivide(&self, parent: &CubeCell, out: &mut Vec<CubeCell>) {
        let child = parent.size / 3.0;
        let c = parent.center;

        out.push(CubeCell::new(c, child));
        for dir in FACE_DIRECTIONS {
            out.push(CubeCell::new(c + dir * child, child));
        }

        if self.pattern == VicsekPattern::UnionFaceRules {
            for dx in [-1.0, 1.0] {
                for dy in [-1.0, 1.0] {
                    for dz in [-1.0, 1.0] {
                        out.push(CubeCell::new(c + Vec3::new(dx, dy, dz) * child, child));
                    }
                }
            }
        }
    }
}
