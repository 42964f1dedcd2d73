use std::f32::consts::PI;

use glam::Vec3;

use super::replace_edges;
use crate::error::{FractalError, Result};
use crate::math::{rotate_z, PointSequence, DEGENERATE_LENGTH};
use crate::traits::CurveGenerator;

/// Rotation that lifts the middle third into the bump apex
const APEX_ANGLE: f32 = -PI / 3.0;

/// Koch curve: every edge grows a triangular bump on its middle third
#[derive(Debug, Clone, Copy, Default)]
pub struct Koch;

impl Koch {
    fn replace(a: Vec3, b: Vec3, index: usize) -> Result<[Vec3; 4]> {
        let v = b - a;
        if v.length() < DEGENERATE_LENGTH {
            return Err(FractalError::DegenerateEdge { index });
        }

        let p1 = a + v / 3.0;
        let p2 = a + v * 2.0 / 3.0;
        let mut apex = p1 + rotate_z(p2 - p1, APEX_ANGLE);
        apex.z = p1.z;

        Ok([a, p1, apex, p2])
    }
}

impl CurveGenerator for Koch {
    fn name(&self) -> &str {
        "koch"
    }

    fn generate(&self, points: &[Vec3], iterations: u32) -> PointSequence {
        (0..iterations).fold(points.to_vec(), |current, _| {
            replace_edges(self.name(), &current, Koch::replace)
        })
    }
}
