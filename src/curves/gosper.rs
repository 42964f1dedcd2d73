use std::f32::consts::PI;

use glam::Vec3;

use super::replace_edges;
use crate::error::{FractalError, Result};
use crate::math::{rotate_z, PointSequence, DEGENERATE_LENGTH};
use crate::traits::CurveGenerator;

const TURN_ANGLE: f32 = -PI / 9.42;
const ARM_RATIO: f32 = 0.378;

/// Gosper-style curve: each edge is bent through two interior points placed
/// along the reversed edge direction turned by a fixed angle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gosper;

impl Gosper {
    // Emits A, P2, P1; B arrives as the start of the next edge.
    fn replace(a: Vec3, b: Vec3, index: usize) -> Result<[Vec3; 3]> {
        let v = a - b;
        let length = v.length();
        if length < DEGENERATE_LENGTH {
            return Err(FractalError::DegenerateEdge { index });
        }

        let arm = rotate_z(v / length, TURN_ANGLE) * (length * ARM_RATIO);
        let p1 = b + arm;
        let p2 = a - arm;

        Ok([a, p2, p1])
    }
}

impl CurveGenerator for Gosper {
    fn name(&self) -> &str {
        "gosper"
    }

    fn generate(&self, points: &[Vec3], iterations: u32) -> PointSequence {
        (0..iterations).fold(points.to_vec(), |current, _| {
            replace_edges(self.name(), &current, Gosper::replace)
        })
    }
}
