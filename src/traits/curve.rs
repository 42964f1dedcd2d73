use glam::Vec3;

use crate::math::PointSequence;

/// Refines a polyline by applying a fixed replacement rule once per iteration
pub trait CurveGenerator {
    /// Generator name for logging
    fn name(&self) -> &str;

    /// Run `iterations` rounds over `points` and return the refined polyline
    fn generate(&self, points: &[Vec3], iterations: u32) -> PointSequence;
}
